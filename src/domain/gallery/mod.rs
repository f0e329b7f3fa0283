// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Pure value objects for the gallery widget: item identity and categories,
//! the single-select filter tag, the per-image load lifecycle, and the
//! category-derived project details shown in the lightbox.

pub mod details;
pub mod filter;
pub mod item;
pub mod load_state;

pub use details::ProjectDetails;
pub use filter::{FilterTag, ALL_KEYWORD};
pub use item::{CategorySet, GalleryItem, ItemId};
pub use load_state::ImageLoadState;
