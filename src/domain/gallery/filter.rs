// SPDX-License-Identifier: MPL-2.0
//! Category filter tag.
//!
//! Exactly one tag is active at a time. `All` is the default and reset value.
//! Matching uses inclusion: an item matches a tag when its category set
//! contains that tag, so multi-category items match several filters.

use super::item::CategorySet;
use std::fmt;

/// Keyword that selects every item.
pub const ALL_KEYWORD: &str = "all";

/// The active filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterTag {
    /// Every item is visible.
    #[default]
    All,
    /// Only items whose categories contain this tag are visible.
    ///
    /// The tag is not validated; unknown tags simply match nothing.
    Tag(String),
}

impl FilterTag {
    /// Parses a filter value as found on a filter control.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value == ALL_KEYWORD {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    /// Returns `true` if an item with `categories` is visible under this filter.
    #[must_use]
    pub fn matches(&self, categories: &CategorySet) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => categories.contains(tag),
        }
    }

    /// Returns the raw filter value (`"all"` for [`FilterTag::All`]).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_KEYWORD,
            Self::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FilterTag {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keyword_parses_to_all() {
        assert_eq!(FilterTag::parse("all"), FilterTag::All);
        assert_eq!(FilterTag::parse(" all "), FilterTag::All);
    }

    #[test]
    fn other_values_parse_to_tag() {
        assert_eq!(FilterTag::parse("upvc"), FilterTag::Tag("upvc".into()));
    }

    #[test]
    fn tag_matches_by_inclusion() {
        let categories = CategorySet::parse("residential aluminium");
        assert!(FilterTag::parse("residential").matches(&categories));
        assert!(FilterTag::parse("aluminium").matches(&categories));
        assert!(!FilterTag::parse("commercial").matches(&categories));
    }

    #[test]
    fn whole_attribute_string_is_not_a_tag() {
        // Inclusion is token-based: the joined string is not itself a category.
        let categories = CategorySet::parse("residential aluminium");
        assert!(!FilterTag::parse("residential aluminium").matches(&categories));
    }

    #[test]
    fn all_matches_items_without_categories() {
        assert!(FilterTag::All.matches(&CategorySet::default()));
    }

    #[test]
    fn display_round_trips_value() {
        assert_eq!(FilterTag::All.to_string(), "all");
        assert_eq!(FilterTag::from("blinds").to_string(), "blinds");
    }
}
