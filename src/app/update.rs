// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Gallery effects are turned into tasks here; the gallery itself never
//! touches the filesystem.

use super::{App, Message};
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::gallery::{self, Effect, Settings};
use crate::media::fetch_image;
use crate::ui::gallery as gallery_view;
use iced::{Size, Task};
use std::path::PathBuf;

/// Catalog file extensions offered by the open dialog.
const CATALOG_EXTENSIONS: &[&str] = &["toml"];

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(msg) => handle_gallery_message(app, msg),
        Message::Tick(_) => handle_gallery_message(app, gallery::Message::Tick),
        Message::OpenCatalogDialog => open_catalog_dialog(
            app.app_state.last_open_directory.clone(),
            app.i18n.tr("dialog-catalog-filter"),
        ),
        Message::OpenCatalogDialogResult(Some(path)) | Message::FileDropped(path) => {
            open_catalog(path)
        }
        Message::OpenCatalogDialogResult(None) => Task::none(),
        Message::CatalogLoaded { path, result } => handle_catalog_loaded(app, path, result),
        Message::WindowResized(size) => handle_window_resized(app, size),
        Message::DismissWarning => {
            if !app.warnings.is_empty() {
                app.warnings.remove(0);
            }
            Task::none()
        }
    }
}

fn handle_gallery_message(app: &mut App, msg: gallery::Message) -> Task<Message> {
    let Some(state) = app.gallery.as_mut() else {
        return Task::none();
    };
    let effects = state.handle(msg, app.now);
    run_effects(effects)
}

/// Converts gallery effects into tasks.
pub(super) fn run_effects(effects: Vec<Effect>) -> Task<Message> {
    Task::batch(effects.into_iter().map(|effect| match effect {
        Effect::FetchItemImage { binding, id, path } => {
            Task::perform(fetch_image(path), move |result| {
                Message::Gallery(gallery::Message::ItemImageFetched {
                    binding,
                    id,
                    result,
                })
            })
        }
        Effect::FetchLightboxImage {
            binding,
            token,
            path,
        } => {
            Task::perform(fetch_image(path.clone()), move |result| {
                Message::Gallery(gallery::Message::LightboxImageFetched {
                    binding,
                    token,
                    path: path.clone(),
                    result,
                })
            })
        }
        Effect::FilterChanged { tag, visible } => {
            tracing::info!(%tag, visible, "gallery filter applied");
            Task::none()
        }
    }))
}

/// Starts loading the catalog at `path`.
pub(super) fn open_catalog(path: PathBuf) -> Task<Message> {
    tracing::debug!(path = %path.display(), "opening catalog");
    Task::perform(load_catalog(path.clone()), move |result| {
        Message::CatalogLoaded {
            path: path.clone(),
            result,
        }
    })
}

async fn load_catalog(path: PathBuf) -> Result<Catalog> {
    tokio::task::spawn_blocking(move || Catalog::load(&path))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Catalog load task failed: {e}"))))
}

fn open_catalog_dialog(last_directory: Option<PathBuf>, filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter(filter_name, CATALOG_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenCatalogDialogResult,
    )
}

/// Binds a freshly loaded catalog, or keeps the current one on failure.
fn handle_catalog_loaded(app: &mut App, path: PathBuf, result: Result<Catalog>) -> Task<Message> {
    let catalog = match result {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to open catalog");
            app.catalog_error = Some(err.to_string());
            return Task::none();
        }
    };

    let mut state = gallery::State::new(&catalog, Settings::from_config(&app.config));
    // The scrollable reports its viewport only once scrolled; seed it from
    // the window so the first screen of tiles loads right away.
    let viewport = gallery_view::grid_viewport(&state, app.window_size, 0.0);
    let effects = state.handle(gallery::Message::ViewportChanged(viewport), app.now);
    tracing::info!(
        path = %path.display(),
        items = state.items().len(),
        disabled = ?state.disabled_features(),
        "catalog opened"
    );

    app.gallery = Some(state);
    app.catalog_error = None;
    app.app_state.remember_catalog(&path);
    app.catalog_path = Some(path);
    if let Some(warning) = app.app_state.save() {
        tracing::warn!(%warning, "could not persist application state");
        app.warnings.push(warning);
    }

    run_effects(effects)
}

fn handle_window_resized(app: &mut App, size: Size) -> Task<Message> {
    app.window_size = size;
    let Some(state) = app.gallery.as_mut() else {
        return Task::none();
    };
    let offset_y = state.viewport().map_or(0.0, |viewport| viewport.offset_y);
    let viewport = gallery_view::grid_viewport(state, size, offset_y);
    let effects = state.handle(gallery::Message::ViewportChanged(viewport), app.now);
    run_effects(effects)
}
