// SPDX-License-Identifier: MPL-2.0
//! Gallery item value objects.
//!
//! Items are immutable once the catalog is bound: the list is fixed for the
//! widget's lifetime and an item's identity is its absolute position.

use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// ItemId
// =============================================================================

/// Position-derived identifier of a gallery item.
///
/// The wrapped value is the item's absolute index in the unfiltered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(usize);

impl ItemId {
    /// Creates an identifier for the item at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the absolute position of the item.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// CategorySet
// =============================================================================

/// Set of category tags attached to an item.
///
/// Built from a space-separated token list such as `"residential aluminium"`.
/// Tokens keep their first-seen order for display; duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    tags: Vec<String>,
}

impl CategorySet {
    /// Parses a whitespace-separated token list.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for token in raw.split_whitespace() {
            if !tags.iter().any(|t| t == token) {
                tags.push(token.to_string());
            }
        }
        Self { tags }
    }

    /// Returns `true` if `tag` is one of the item's categories.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Iterates over the tags in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags.join(" "))
    }
}

// =============================================================================
// GalleryItem
// =============================================================================

/// A single project shown in the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Absolute position in the catalog.
    pub id: ItemId,
    /// Category tags used by filtering and detail derivation.
    pub categories: CategorySet,
    /// Small image shown in the grid.
    pub thumbnail: PathBuf,
    /// High-resolution image, if the catalog provides one.
    pub full_image: Option<PathBuf>,
    pub title: String,
    pub description: String,
    /// Short type label (e.g. "uPVC Windows").
    pub badge: String,
}

impl GalleryItem {
    /// Returns the high-resolution reference, falling back to the thumbnail.
    #[must_use]
    pub fn full_image_or_thumbnail(&self) -> &Path {
        self.full_image.as_deref().unwrap_or(&self.thumbnail)
    }

    /// Returns `true` if the item has its own high-resolution image.
    #[must_use]
    pub fn has_full_image(&self) -> bool {
        self.full_image.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(full: Option<&str>) -> GalleryItem {
        GalleryItem {
            id: ItemId::new(3),
            categories: CategorySet::parse("residential upvc"),
            thumbnail: PathBuf::from("thumbs/a.jpg"),
            full_image: full.map(PathBuf::from),
            title: "Sliding door".into(),
            description: "Three-panel sliding door".into(),
            badge: "uPVC Doors".into(),
        }
    }

    #[test]
    fn category_set_splits_on_whitespace() {
        let set = CategorySet::parse("  residential   aluminium ");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["residential", "aluminium"]);
        assert!(set.contains("aluminium"));
        assert!(!set.contains("alu"));
    }

    #[test]
    fn category_set_collapses_duplicates() {
        let set = CategorySet::parse("upvc upvc residential upvc");
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "upvc residential");
    }

    #[test]
    fn empty_category_string_yields_empty_set() {
        assert!(CategorySet::parse("   ").is_empty());
    }

    #[test]
    fn full_image_falls_back_to_thumbnail() {
        assert_eq!(item(None).full_image_or_thumbnail(), Path::new("thumbs/a.jpg"));
        assert_eq!(
            item(Some("full/a.jpg")).full_image_or_thumbnail(),
            Path::new("full/a.jpg")
        );
    }

    #[test]
    fn item_id_displays_position() {
        assert_eq!(ItemId::new(7).to_string(), "#7");
        assert_eq!(item(None).id.index(), 3);
    }
}
