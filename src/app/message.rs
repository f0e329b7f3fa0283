// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::gallery;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Gallery messages are
/// forwarded unchanged to the widget.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Trigger the open catalog dialog from the empty state.
    OpenCatalogDialog,
    /// Result from the open catalog dialog.
    OpenCatalogDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    CatalogLoaded {
        path: PathBuf,
        result: Result<Catalog, Error>,
    },
    WindowResized(Size),
    /// Hide the warning banner.
    DismissWarning,
    /// Periodic tick driving filter show/hide transitions.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog path to open on startup.
    pub file_path: Option<String>,
    /// Optional data directory override (for `state.cbor`).
    /// Takes precedence over the `VITRINE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over the `VITRINE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
