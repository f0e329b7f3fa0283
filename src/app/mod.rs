// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery widget.
//!
//! The `App` struct wires together the catalog, localization and settings,
//! and translates gallery effects into tasks (image fetches) and logs.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::gallery;
use crate::ui::theming::ThemeMode;
use i18n::fluent::I18n;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    /// `None` until a catalog has been opened.
    gallery: Option<gallery::State>,
    /// Catalog currently bound to the gallery.
    catalog_path: Option<PathBuf>,
    /// Last catalog load failure, shown by the empty state.
    catalog_error: Option<String>,
    theme_mode: ThemeMode,
    window_size: Size,
    /// Time of the last processed message; drives transition opacity.
    now: Instant,
    /// Persisted application state (last catalog, dialog directory).
    app_state: persisted_state::AppState,
    /// i18n keys of warnings raised while loading config or state.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("catalog_path", &self.catalog_path)
            .field("has_gallery", &self.gallery.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and state, then opens the startup catalog if any.
    ///
    /// The catalog given on the command line wins over the remembered one.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();
        let i18n = I18n::new(flags.lang, &config);

        let window_size = window_settings().size;
        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            gallery: None,
            catalog_path: None,
            catalog_error: None,
            window_size,
            now: Instant::now(),
            warnings: config_warning.into_iter().chain(state_warning).collect(),
            app_state,
        };

        let startup = flags
            .file_path
            .map(PathBuf::from)
            .or_else(|| app.app_state.existing_last_catalog().map(PathBuf::from));

        let task = match startup {
            Some(path) => update::open_catalog(path),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        let base = self.i18n.tr("window-title");
        match self.gallery.as_ref().and_then(gallery::State::title) {
            Some(title) => format!("{title} - {base}"),
            None => base,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced()
    }

    fn subscription(&self) -> Subscription<Message> {
        let pending = self
            .gallery
            .as_ref()
            .is_some_and(gallery::State::has_pending_transitions);

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(pending),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: self.gallery.as_ref(),
            catalog_error: self.catalog_error.as_deref(),
            warning: self.warnings.first().map(String::as_str),
            now: self.now,
        })
    }
}
