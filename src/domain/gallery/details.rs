// SPDX-License-Identifier: MPL-2.0
//! Project details derived from category tags.
//!
//! The lightbox shows material, location and installation time for the
//! current item. These are looked up from a fixed table keyed by category.
//! Location and installation time come from the same rule; material comes
//! from a separate one. Within each table the first matching row wins.

use super::item::CategorySet;

/// One row of the location table.
struct LocationRule {
    category: &'static str,
    location: &'static str,
    install_time: &'static str,
}

/// One row of the material table.
struct MaterialRule {
    category: &'static str,
    material: &'static str,
}

const LOCATION_RULES: &[LocationRule] = &[
    LocationRule {
        category: "residential",
        location: "Residential Area",
        install_time: "2-4 Days",
    },
    LocationRule {
        category: "commercial",
        location: "Commercial District",
        install_time: "5-7 Days",
    },
];

const MATERIAL_RULES: &[MaterialRule] = &[
    MaterialRule {
        category: "aluminium",
        material: "Premium Aluminium",
    },
    MaterialRule {
        category: "upvc",
        material: "High-Grade uPVC",
    },
];

/// Detail fields shown under the lightbox description.
///
/// A field is `None` when no rule covers the item's categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectDetails {
    pub material: Option<&'static str>,
    pub location: Option<&'static str>,
    pub install_time: Option<&'static str>,
}

impl ProjectDetails {
    /// Derives the details for an item's category set.
    #[must_use]
    pub fn derive(categories: &CategorySet) -> Self {
        let location_rule = LOCATION_RULES
            .iter()
            .find(|rule| categories.contains(rule.category));
        let material = MATERIAL_RULES
            .iter()
            .find(|rule| categories.contains(rule.category))
            .map(|rule| rule.material);

        Self {
            material,
            location: location_rule.map(|rule| rule.location),
            install_time: location_rule.map(|rule| rule.install_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(raw: &str) -> ProjectDetails {
        ProjectDetails::derive(&CategorySet::parse(raw))
    }

    #[test]
    fn residential_aluminium() {
        let details = derive("residential aluminium");
        assert_eq!(details.material, Some("Premium Aluminium"));
        assert_eq!(details.location, Some("Residential Area"));
        assert_eq!(details.install_time, Some("2-4 Days"));
    }

    #[test]
    fn commercial_upvc() {
        let details = derive("commercial upvc");
        assert_eq!(details.material, Some("High-Grade uPVC"));
        assert_eq!(details.location, Some("Commercial District"));
        assert_eq!(details.install_time, Some("5-7 Days"));
    }

    #[test]
    fn residential_wins_over_commercial() {
        let details = derive("commercial residential");
        assert_eq!(details.location, Some("Residential Area"));
        assert_eq!(details.install_time, Some("2-4 Days"));
    }

    #[test]
    fn aluminium_wins_over_upvc() {
        assert_eq!(derive("upvc aluminium").material, Some("Premium Aluminium"));
    }

    #[test]
    fn unknown_categories_yield_empty_details() {
        assert_eq!(derive("blinds"), ProjectDetails::default());
    }
}
