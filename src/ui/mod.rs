// SPDX-License-Identifier: MPL-2.0
//! User interface views and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they read
//! the gallery state and emit gallery messages, never mutating anything.
//!
//! - [`gallery`] - Filter bar, tile grid and lightbox overlay
//! - [`empty_state`] - Shown until a catalog is opened
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod empty_state;
pub mod gallery;
pub mod styles;
pub mod theming;
