// SPDX-License-Identifier: MPL-2.0
//! Image loading for the gallery.
//!
//! Synchronous decoding, its async wrapper, and the decoded-image cache.

pub mod cache;
pub mod fetch;
pub mod image;

pub use cache::{CacheStats, ImageCache};
pub use fetch::fetch_image;
pub use image::{load_image, ImageData};
