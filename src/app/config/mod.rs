// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Grid geometry
//! - `[lazy_load]` - Proximity margins for deferred image fetches
//! - `[transitions]` - Filter show/hide delays
//! - `[lightbox]` - Decoded image cache size
//!
//! Numeric values are stored as written and clamped when read through the
//! accessor methods, so a hand-edited file can never request a nonsensical
//! value.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `VITRINE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use vitrine::app::config;
//!
//! let (config, _warning) = config::load();
//! println!("{} columns", config.columns());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Grid geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Tiles per row.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,

    /// Tile height in logical pixels.
    #[serde(
        default = "default_tile_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub tile_height: Option<f32>,

    /// Gap between tiles in logical pixels.
    #[serde(
        default = "default_tile_spacing",
        skip_serializing_if = "Option::is_none"
    )]
    pub tile_spacing: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            tile_height: default_tile_height(),
            tile_spacing: default_tile_spacing(),
        }
    }
}

/// Lazy image loading margins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LazyLoadConfig {
    /// Proximity observer margin ahead of the viewport.
    #[serde(
        default = "default_observer_margin_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub observer_margin_px: Option<f32>,

    /// Manual sweep lookahead below the viewport bottom.
    #[serde(
        default = "default_sweep_lookahead_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub sweep_lookahead_px: Option<f32>,
}

impl Default for LazyLoadConfig {
    fn default() -> Self {
        Self {
            observer_margin_px: default_observer_margin_px(),
            sweep_lookahead_px: default_sweep_lookahead_px(),
        }
    }
}

/// Filter transition delays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionsConfig {
    #[serde(
        default = "default_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_delay_ms: Option<u64>,

    #[serde(
        default = "default_show_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_delay_ms: Option<u64>,
}

impl Default for TransitionsConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay_ms(),
            show_delay_ms: default_show_delay_ms(),
        }
    }
}

/// Lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Number of decoded high-resolution images kept in memory.
    #[serde(
        default = "default_cache_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_images: Option<usize>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            cache_images: default_cache_images(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub lazy_load: LazyLoadConfig,

    #[serde(default)]
    pub transitions: TransitionsConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,
}

impl Config {
    /// Grid column count, clamped to the supported range.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.gallery
            .columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }

    #[must_use]
    pub fn tile_height(&self) -> f32 {
        clamp_f32(
            self.gallery.tile_height,
            DEFAULT_TILE_HEIGHT,
            MIN_TILE_HEIGHT,
            MAX_TILE_HEIGHT,
        )
    }

    #[must_use]
    pub fn tile_spacing(&self) -> f32 {
        clamp_f32(
            self.gallery.tile_spacing,
            DEFAULT_TILE_SPACING,
            MIN_TILE_SPACING,
            MAX_TILE_SPACING,
        )
    }

    #[must_use]
    pub fn observer_margin_px(&self) -> f32 {
        clamp_f32(
            self.lazy_load.observer_margin_px,
            DEFAULT_OBSERVER_MARGIN_PX,
            MIN_LOAD_MARGIN_PX,
            MAX_LOAD_MARGIN_PX,
        )
    }

    #[must_use]
    pub fn sweep_lookahead_px(&self) -> f32 {
        clamp_f32(
            self.lazy_load.sweep_lookahead_px,
            DEFAULT_SWEEP_LOOKAHEAD_PX,
            MIN_LOAD_MARGIN_PX,
            MAX_LOAD_MARGIN_PX,
        )
    }

    #[must_use]
    pub fn hide_delay(&self) -> Duration {
        let ms = self
            .transitions
            .hide_delay_ms
            .unwrap_or(DEFAULT_HIDE_DELAY_MS)
            .min(MAX_TRANSITION_DELAY_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn show_delay(&self) -> Duration {
        let ms = self
            .transitions
            .show_delay_ms
            .unwrap_or(DEFAULT_SHOW_DELAY_MS)
            .min(MAX_TRANSITION_DELAY_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn lightbox_cache_images(&self) -> usize {
        self.lightbox
            .cache_images
            .unwrap_or(DEFAULT_LIGHTBOX_CACHE_IMAGES)
            .clamp(MIN_LIGHTBOX_CACHE_IMAGES, MAX_LIGHTBOX_CACHE_IMAGES)
    }
}

/// Clamps an optional float, treating NaN like a missing value.
fn clamp_f32(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_columns() -> Option<u16> {
    Some(DEFAULT_GRID_COLUMNS)
}

fn default_tile_height() -> Option<f32> {
    Some(DEFAULT_TILE_HEIGHT)
}

fn default_tile_spacing() -> Option<f32> {
    Some(DEFAULT_TILE_SPACING)
}

fn default_observer_margin_px() -> Option<f32> {
    Some(DEFAULT_OBSERVER_MARGIN_PX)
}

fn default_sweep_lookahead_px() -> Option<f32> {
    Some(DEFAULT_SWEEP_LOOKAHEAD_PX)
}

fn default_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_HIDE_DELAY_MS)
}

fn default_show_delay_ms() -> Option<u64> {
    Some(DEFAULT_SHOW_DELAY_MS)
}

fn default_cache_images() -> Option<usize> {
    Some(DEFAULT_LIGHTBOX_CACHE_IMAGES)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
