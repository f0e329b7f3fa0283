// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`GalleryItem`](gallery::GalleryItem),
//!   [`FilterTag`](gallery::FilterTag), [`ImageLoadState`](gallery::ImageLoadState),
//!   [`ProjectDetails`](gallery::ProjectDetails))

pub mod gallery;
