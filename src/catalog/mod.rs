// SPDX-License-Identifier: MPL-2.0
//! Gallery catalog: the page content the widget binds to.
//!
//! A catalog is a TOML file with three optional sections:
//!
//! ```toml
//! [gallery]
//! title = "Our Projects"
//!
//! [[gallery.filters]]
//! tag = "all"
//! label = "All Projects"
//!
//! [[gallery.items]]
//! category = "residential upvc"
//! thumbnail = "thumbs/01.jpg"
//! full_image = "full/01.jpg"
//! title = "Sliding Patio Door"
//! description = "Three-panel uPVC door"
//! badge = "uPVC Doors"
//!
//! [lightbox]
//! ```
//!
//! Each section enables one feature. A missing section is not a parse
//! error: the feature that needs it reports [`Error::MissingElement`] when
//! asked for it and the others keep working.
//!
//! Relative image paths are resolved against the catalog's directory.

use crate::domain::gallery::{CategorySet, FilterTag, GalleryItem, ItemId};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Section names reported by [`Error::MissingElement`].
pub const SECTION_GALLERY: &str = "gallery";
pub const SECTION_FILTERS: &str = "gallery.filters";
pub const SECTION_LIGHTBOX: &str = "lightbox";

// =============================================================================
// Raw TOML shape
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    gallery: Option<RawGallery>,
    lightbox: Option<toml::Table>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGallery {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    filters: Vec<RawFilter>,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFilter {
    tag: String,
    label: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItem {
    #[serde(default)]
    category: String,
    thumbnail: PathBuf,
    #[serde(default)]
    full_image: Option<PathBuf>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    badge: String,
}

// =============================================================================
// Catalog
// =============================================================================

/// A filter control as declared by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDefinition {
    pub tag: FilterTag,
    pub label: String,
}

/// Parsed catalog content.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    source: Option<PathBuf>,
    title: Option<String>,
    /// `None` when the `[gallery]` section is absent.
    items: Option<Vec<GalleryItem>>,
    filters: Vec<FilterDefinition>,
    has_lightbox: bool,
}

impl Catalog {
    /// Reads and parses the catalog at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Catalog(format!("{}: {e}", path.display())))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let mut catalog = Self::parse(&content, base_dir)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Parses catalog text, resolving relative image paths against `base_dir`.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self> {
        let raw: RawCatalog =
            toml::from_str(content).map_err(|e| Error::Catalog(e.message().to_string()))?;

        let (title, items, filters) = match raw.gallery {
            Some(gallery) => {
                let items = gallery
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| item.into_gallery_item(index, base_dir))
                    .collect();
                let filters = gallery
                    .filters
                    .into_iter()
                    .map(|filter| FilterDefinition {
                        tag: FilterTag::parse(&filter.tag),
                        label: filter.label,
                    })
                    .collect();
                (gallery.title, Some(items), filters)
            }
            None => (None, None, Vec::new()),
        };

        Ok(Self {
            source: None,
            title,
            items,
            filters,
            has_lightbox: raw.lightbox.is_some(),
        })
    }

    /// File the catalog was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Optional heading shown above the gallery.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the gallery items, or `MissingElement` without a `[gallery]` section.
    pub fn require_grid(&self) -> Result<&[GalleryItem]> {
        self.items
            .as_deref()
            .ok_or(Error::MissingElement(SECTION_GALLERY))
    }

    /// Returns the filter controls, or `MissingElement` when none are declared.
    pub fn require_filters(&self) -> Result<&[FilterDefinition]> {
        if self.filters.is_empty() {
            Err(Error::MissingElement(SECTION_FILTERS))
        } else {
            Ok(&self.filters)
        }
    }

    /// Succeeds when the `[lightbox]` section is present.
    pub fn require_lightbox(&self) -> Result<()> {
        if self.has_lightbox {
            Ok(())
        } else {
            Err(Error::MissingElement(SECTION_LIGHTBOX))
        }
    }

    /// All items, empty when the grid section is absent.
    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

impl RawItem {
    fn into_gallery_item(self, index: usize, base_dir: &Path) -> GalleryItem {
        GalleryItem {
            id: ItemId::new(index),
            categories: CategorySet::parse(&self.category),
            thumbnail: resolve(base_dir, self.thumbnail),
            full_image: self.full_image.map(|path| resolve(base_dir, path)),
            title: self.title,
            description: self.description,
            badge: self.badge,
        }
    }
}

fn resolve(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const FULL: &str = r#"
        [gallery]
        title = "Our Projects"

        [[gallery.filters]]
        tag = "all"
        label = "All Projects"

        [[gallery.filters]]
        tag = "upvc"
        label = "uPVC"

        [[gallery.items]]
        category = "residential upvc"
        thumbnail = "thumbs/01.jpg"
        full_image = "full/01.jpg"
        title = "Sliding Patio Door"
        description = "Three-panel door"
        badge = "uPVC Doors"

        [[gallery.items]]
        category = "commercial aluminium"
        thumbnail = "/abs/02.jpg"
        title = "Shopfront"

        [lightbox]
    "#;

    #[test]
    fn parses_items_in_order_with_position_ids() {
        let catalog = Catalog::parse(FULL, Path::new("/site")).expect("parse");
        let items = catalog.require_grid().expect("grid");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, ItemId::new(0));
        assert_eq!(items[1].id, ItemId::new(1));
        assert!(items[0].categories.contains("upvc"));
        assert_eq!(items[1].badge, "");
        assert_eq!(catalog.title(), Some("Our Projects"));
    }

    #[test]
    fn resolves_relative_paths_against_base_dir() {
        let catalog = Catalog::parse(FULL, Path::new("/site")).expect("parse");
        let items = catalog.items();

        assert_eq!(items[0].thumbnail, PathBuf::from("/site/thumbs/01.jpg"));
        assert_eq!(items[0].full_image, Some(PathBuf::from("/site/full/01.jpg")));
        assert_eq!(items[1].thumbnail, PathBuf::from("/abs/02.jpg"));
        assert!(items[1].full_image.is_none());
    }

    #[test]
    fn filter_definitions_parse_all_keyword() {
        let catalog = Catalog::parse(FULL, Path::new("")).expect("parse");
        let filters = catalog.require_filters().expect("filters");
        assert_eq!(filters[0].tag, FilterTag::All);
        assert_eq!(filters[1].tag, FilterTag::Tag("upvc".into()));
        assert!(catalog.require_lightbox().is_ok());
    }

    #[test]
    fn missing_sections_report_missing_element() {
        let catalog = Catalog::parse("", Path::new("")).expect("empty catalog parses");

        assert!(matches!(
            catalog.require_grid(),
            Err(Error::MissingElement(SECTION_GALLERY))
        ));
        assert!(matches!(
            catalog.require_filters(),
            Err(Error::MissingElement(SECTION_FILTERS))
        ));
        assert!(matches!(
            catalog.require_lightbox(),
            Err(Error::MissingElement(SECTION_LIGHTBOX))
        ));
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn gallery_without_filters_still_has_grid() {
        let content = r#"
            [[gallery.items]]
            thumbnail = "a.jpg"
        "#;
        let catalog = Catalog::parse(content, Path::new("")).expect("parse");
        assert_eq!(catalog.require_grid().map(<[_]>::len).ok(), Some(1));
        assert!(catalog.require_filters().is_err());
    }

    #[test]
    fn item_without_thumbnail_is_rejected() {
        let content = r#"
            [[gallery.items]]
            title = "No image"
        "#;
        assert!(matches!(
            Catalog::parse(content, Path::new("")),
            Err(Error::Catalog(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let content = "[gallery]\ncolumns = 4\n";
        assert!(matches!(
            Catalog::parse(content, Path::new("")),
            Err(Error::Catalog(_))
        ));
    }

    #[test]
    fn load_records_source_and_uses_file_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("catalog.toml");
        fs::write(&path, FULL).expect("write catalog");

        let catalog = Catalog::load(&path).expect("load");
        assert_eq!(catalog.source(), Some(path.as_path()));
        assert_eq!(
            catalog.items()[0].thumbnail,
            temp_dir.path().join("thumbs/01.jpg")
        );
    }

    #[test]
    fn load_missing_file_is_catalog_error() {
        let temp_dir = tempdir().expect("create temp dir");
        let result = Catalog::load(&temp_dir.path().join("none.toml"));
        assert!(matches!(result, Err(Error::Catalog(_))));
    }
}
