// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the gallery widget.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method
//! (scroll_lock is a plain value with lock/unlock). The gallery component
//! orchestrates them.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── filter       - Active tag, pressed controls, counts
//!     ├── visibility   - Per-item show/hide transitions
//!     ├── lazy_loader  - Per-item high-resolution fetches
//!     ├── lightbox     - Open/closed, current index, request tokens
//!     └── scroll_lock  - Page scroll saved while the lightbox is open
//! ```

pub mod filter;
pub mod lazy_loader;
pub mod lightbox;
pub mod scroll_lock;
pub mod visibility;
