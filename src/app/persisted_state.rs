// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds what the application remembers between sessions without it being a
//! preference: the last catalog that was opened successfully and the
//! directory the open dialog should start in. User preferences live in
//! `settings.toml` instead.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit directory override
//! 2. Set `VITRINE_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Catalog reopened at startup when none is given on the command line.
    #[serde(default)]
    pub last_catalog: Option<PathBuf>,

    /// Initial directory of the catalog open dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). A missing file is not an
    /// error; an unreadable one yields defaults plus a warning key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from `base_dir`, or the default location.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "state file is corrupted");
                    (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot read state file");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves application state to the default location.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to `base_dir`, or the default location.
    ///
    /// Returns a warning key if the state could not be written.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    /// Records a successfully opened catalog and its directory.
    pub fn remember_catalog(&mut self, catalog_path: &Path) {
        self.last_catalog = Some(catalog_path.to_path_buf());
        if let Some(parent) = catalog_path.parent() {
            if !parent.as_os_str().is_empty() {
                self.last_open_directory = Some(parent.to_path_buf());
            }
        }
    }

    /// Returns the remembered catalog if it still exists on disk.
    #[must_use]
    pub fn existing_last_catalog(&self) -> Option<&Path> {
        self.last_catalog.as_deref().filter(|path| path.is_file())
    }
}

fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STATE_FILE);
        path
    })
}
