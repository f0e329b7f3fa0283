// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Every tunable exposed in `settings.toml` has a default and an inclusive
//! range here. Loaded values are clamped into these ranges.
//!
//! # Categories
//!
//! - **Grid**: Column count and tile geometry
//! - **Lazy Load**: Proximity margins for deferred image fetches
//! - **Transitions**: Filter show/hide animation delays
//! - **Lightbox**: Decoded image cache size

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of tiles per grid row.
pub const DEFAULT_GRID_COLUMNS: u16 = 3;

/// Minimum number of grid columns.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum number of grid columns.
pub const MAX_GRID_COLUMNS: u16 = 8;

/// Default tile height in logical pixels.
pub const DEFAULT_TILE_HEIGHT: f32 = 240.0;

/// Minimum tile height in logical pixels.
pub const MIN_TILE_HEIGHT: f32 = 80.0;

/// Maximum tile height in logical pixels.
pub const MAX_TILE_HEIGHT: f32 = 800.0;

/// Default gap between tiles in logical pixels.
pub const DEFAULT_TILE_SPACING: f32 = 16.0;

/// Minimum gap between tiles.
pub const MIN_TILE_SPACING: f32 = 0.0;

/// Maximum gap between tiles.
pub const MAX_TILE_SPACING: f32 = 64.0;

// ==========================================================================
// Lazy Load Defaults
// ==========================================================================

/// Distance ahead of the viewport at which the proximity observer fires.
pub const DEFAULT_OBSERVER_MARGIN_PX: f32 = 100.0;

/// Lookahead below the viewport bottom used by the manual sweep.
pub const DEFAULT_SWEEP_LOOKAHEAD_PX: f32 = 300.0;

/// Minimum proximity margin (0 = only fetch once actually visible).
pub const MIN_LOAD_MARGIN_PX: f32 = 0.0;

/// Maximum proximity margin.
pub const MAX_LOAD_MARGIN_PX: f32 = 2000.0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Time hidden items keep their layout slot while fading out.
pub const DEFAULT_HIDE_DELAY_MS: u64 = 300;

/// Time shown items wait in layout before fading in.
pub const DEFAULT_SHOW_DELAY_MS: u64 = 50;

/// Upper bound for both transition delays.
pub const MAX_TRANSITION_DELAY_MS: u64 = 2000;

/// Interval of the transition tick subscription.
pub const TRANSITION_TICK_MS: u64 = 50;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Default number of decoded high-resolution images kept in memory.
pub const DEFAULT_LIGHTBOX_CACHE_IMAGES: usize = 16;

/// Minimum cache capacity.
pub const MIN_LIGHTBOX_CACHE_IMAGES: usize = 1;

/// Maximum cache capacity.
pub const MAX_LIGHTBOX_CACHE_IMAGES: usize = 128;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Grid validation
    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);

    assert!(MIN_TILE_HEIGHT > 0.0);
    assert!(MAX_TILE_HEIGHT >= MIN_TILE_HEIGHT);
    assert!(DEFAULT_TILE_HEIGHT >= MIN_TILE_HEIGHT);
    assert!(DEFAULT_TILE_HEIGHT <= MAX_TILE_HEIGHT);

    assert!(MIN_TILE_SPACING >= 0.0);
    assert!(MAX_TILE_SPACING >= MIN_TILE_SPACING);
    assert!(DEFAULT_TILE_SPACING >= MIN_TILE_SPACING);
    assert!(DEFAULT_TILE_SPACING <= MAX_TILE_SPACING);

    // Lazy load validation
    assert!(MAX_LOAD_MARGIN_PX >= MIN_LOAD_MARGIN_PX);
    assert!(DEFAULT_OBSERVER_MARGIN_PX >= MIN_LOAD_MARGIN_PX);
    assert!(DEFAULT_OBSERVER_MARGIN_PX <= MAX_LOAD_MARGIN_PX);
    assert!(DEFAULT_SWEEP_LOOKAHEAD_PX >= MIN_LOAD_MARGIN_PX);
    assert!(DEFAULT_SWEEP_LOOKAHEAD_PX <= MAX_LOAD_MARGIN_PX);

    // Transition validation
    assert!(DEFAULT_HIDE_DELAY_MS <= MAX_TRANSITION_DELAY_MS);
    assert!(DEFAULT_SHOW_DELAY_MS <= MAX_TRANSITION_DELAY_MS);
    assert!(TRANSITION_TICK_MS > 0);
    // The tick must be fine enough to observe the show delay.
    assert!(TRANSITION_TICK_MS <= DEFAULT_SHOW_DELAY_MS);

    // Lightbox cache validation
    assert!(MIN_LIGHTBOX_CACHE_IMAGES > 0);
    assert!(MAX_LIGHTBOX_CACHE_IMAGES >= MIN_LIGHTBOX_CACHE_IMAGES);
    assert!(DEFAULT_LIGHTBOX_CACHE_IMAGES >= MIN_LIGHTBOX_CACHE_IMAGES);
    assert!(DEFAULT_LIGHTBOX_CACHE_IMAGES <= MAX_LIGHTBOX_CACHE_IMAGES);
};
