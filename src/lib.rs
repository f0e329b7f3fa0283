// SPDX-License-Identifier: MPL-2.0
//! `vitrine` is a filterable project gallery built with the Iced GUI framework.
//!
//! A catalog file lists projects with category tags. The gallery shows them
//! as a tile grid with category filter controls, fetches tile images lazily
//! as they approach the viewport, and opens a lightbox viewer with wrapping
//! keyboard navigation.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod media;
pub mod ui;
