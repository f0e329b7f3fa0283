// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! Two directories matter: the config directory (holds `settings.toml`) and
//! the data directory (holds `state.cbor`, the remembered catalog).
//!
//! # Resolution Order
//!
//! 1. **Explicit override** passed to the `_with_override()` functions
//! 2. **CLI arguments** (`--config-dir`, `--data-dir`) registered with [`init_cli_overrides`]
//! 3. **Environment variables** (`VITRINE_CONFIG_DIR`, `VITRINE_DATA_DIR`), ignored when empty
//! 4. **Platform default** from `dirs`, with the application name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Vitrine";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "VITRINE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "VITRINE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the directories given on the command line.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI directory overrides already initialized");
    }
}

/// One directory kind and where each resolution layer looks for it.
struct DirKind {
    cli: &'static OnceLock<Option<PathBuf>>,
    env_var: &'static str,
    platform: fn() -> Option<PathBuf>,
}

static DATA: DirKind = DirKind {
    cli: &CLI_DATA_DIR,
    env_var: ENV_DATA_DIR,
    platform: dirs::data_dir,
};

static CONFIG: DirKind = DirKind {
    cli: &CLI_CONFIG_DIR,
    env_var: ENV_CONFIG_DIR,
    platform: dirs::config_dir,
};

fn resolve(kind: &DirKind, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = kind.cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(kind.env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    (kind.platform)().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the data directory (application state, not preferences).
///
/// Returns `None` if the platform directory cannot be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(&DATA, override_path)
}

/// Returns the config directory (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(&CONFIG, override_path)
}
