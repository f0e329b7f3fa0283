// SPDX-License-Identifier: MPL-2.0
//! The gallery widget: filter controller, lazy image loader and lightbox.
//!
//! Everything here is window-free state; views live in [`crate::ui::gallery`].

pub mod component;
pub mod layout;
pub mod subcomponents;

pub use component::{
    Binding, Effect, KeyAction, LightboxView, Message, Settings, State, TileImage,
};
pub use layout::{GridLayout, ProximityObserver, Viewport};
