// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.
//!
//! The component binds to a [`Catalog`] once and owns every piece of widget
//! state. It never performs I/O itself: [`State::handle`] returns
//! [`Effect`]s (image fetches, filter notifications) that the application
//! turns into tasks, and fetch results come back as messages.

use crate::app::config::{self, Config};
use crate::catalog::Catalog;
use crate::domain::gallery::{
    FilterTag, GalleryItem, ImageLoadState, ItemId, ProjectDetails,
};
use crate::error::Error;
use crate::gallery::layout::{GridLayout, ProximityObserver, Viewport};
use crate::gallery::subcomponents::{
    filter, lazy_loader, lightbox, scroll_lock, visibility,
};
use crate::media::{ImageCache, ImageData};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

// =============================================================================
// Settings
// =============================================================================

/// Tunables the component is built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub layout: GridLayout,
    pub observer_margin: f32,
    pub sweep_lookahead: f32,
    pub show_delay: Duration,
    pub hide_delay: Duration,
    pub cache_images: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Settings {
    /// Reads (clamped) values from the user configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            layout: GridLayout::new(config.columns(), config.tile_height(), config.tile_spacing()),
            observer_margin: config.observer_margin_px(),
            sweep_lookahead: config.sweep_lookahead_px(),
            show_delay: config.show_delay(),
            hide_delay: config.hide_delay(),
            cache_images: config.lightbox_cache_images(),
        }
    }
}

// =============================================================================
// Messages and Effects
// =============================================================================

static NEXT_BINDING: AtomicU64 = AtomicU64::new(1);

/// Identifies one binding of the widget to a catalog.
///
/// Fetch effects carry it and their completions echo it back, so results
/// started for a previously bound catalog are recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding(u64);

impl Binding {
    fn next() -> Self {
        Self(NEXT_BINDING.fetch_add(1, Ordering::Relaxed))
    }
}

/// Keyboard actions relevant to the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Previous,
    Close,
}

/// Messages emitted by gallery widgets and async tasks.
#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(FilterTag),
    /// The scrollable reported a new offset or size.
    ViewportChanged(Viewport),
    /// Direct proximity report for one item.
    ItemNear(ItemId),
    ItemImageFetched {
        binding: Binding,
        id: ItemId,
        result: Result<ImageData, Error>,
    },
    OpenLightbox(ItemId),
    LightboxNext,
    LightboxPrevious,
    LightboxClose,
    /// Click on the dimmed area around the lightbox content.
    BackdropClicked,
    LightboxImageFetched {
        binding: Binding,
        token: lightbox::RequestToken,
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    Key(KeyAction),
    /// Advance show/hide transitions.
    Tick,
}

/// Side effects requested by the component.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Decode the image for a grid tile.
    FetchItemImage {
        binding: Binding,
        id: ItemId,
        path: PathBuf,
    },
    /// Decode the high-resolution image for the lightbox.
    FetchLightboxImage {
        binding: Binding,
        token: lightbox::RequestToken,
        path: PathBuf,
    },
    /// A filter was applied.
    FilterChanged { tag: FilterTag, visible: usize },
}

/// Image source of a grid tile.
#[derive(Debug, Clone, Copy)]
pub enum TileImage<'a> {
    /// The lazily loaded image has been decoded.
    Decoded(&'a ImageData),
    /// Not loaded yet, or the load failed: the thumbnail file is shown.
    Thumbnail(&'a Path),
}

/// Everything the lightbox view needs for the current item.
#[derive(Debug, Clone, Copy)]
pub struct LightboxView<'a> {
    pub item: &'a GalleryItem,
    pub index: usize,
    pub total: usize,
    pub details: ProjectDetails,
    pub display: &'a lightbox::Display,
}

// =============================================================================
// State
// =============================================================================

#[derive(Debug)]
pub struct State {
    binding: Binding,
    title: Option<String>,
    items: Vec<GalleryItem>,
    /// `None` when the catalog declares no filter controls.
    filter: Option<filter::State>,
    visibility: visibility::State,
    loader: lazy_loader::State,
    /// `None` when the catalog has no `[lightbox]` section.
    lightbox: Option<lightbox::State>,
    scroll: scroll_lock::State,
    observer: ProximityObserver,
    cache: ImageCache,
    settings: Settings,
    viewport: Option<Viewport>,
    disabled: Vec<&'static str>,
}

impl State {
    /// Binds the widget to `catalog`.
    ///
    /// Each missing catalog section disables only the feature that needs it;
    /// the rest of the widget keeps working.
    #[must_use]
    pub fn new(catalog: &Catalog, settings: Settings) -> Self {
        let mut disabled = Vec::new();
        let mut note_missing = |error: Error| {
            if let Error::MissingElement(section) = error {
                tracing::warn!(section, "catalog section missing, feature disabled");
                disabled.push(section);
            }
        };

        let items = match catalog.require_grid() {
            Ok(items) => items.to_vec(),
            Err(error) => {
                note_missing(error);
                Vec::new()
            }
        };

        let filter = match catalog.require_filters() {
            Ok(definitions) => Some(filter::State::new(definitions, &items)),
            Err(error) => {
                note_missing(error);
                None
            }
        };

        let lightbox = match catalog.require_lightbox() {
            Ok(()) => Some(lightbox::State::new(items.len())),
            Err(error) => {
                note_missing(error);
                None
            }
        };

        let mut observer = ProximityObserver::new(settings.observer_margin);
        for item in &items {
            observer.observe(item.id);
        }

        tracing::debug!(items = items.len(), "gallery bound to catalog");

        Self {
            binding: Binding::next(),
            title: catalog.title().map(str::to_string),
            visibility: visibility::State::new(
                items.len(),
                settings.show_delay,
                settings.hide_delay,
            ),
            loader: lazy_loader::State::new(&items),
            items,
            filter,
            lightbox,
            scroll: scroll_lock::State::default(),
            observer,
            cache: ImageCache::new(settings.cache_images),
            settings,
            viewport: None,
            disabled,
        }
    }

    /// Handles a message at time `now` and returns the requested effects.
    pub fn handle(&mut self, message: Message, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        match message {
            Message::FilterSelected(tag) => {
                self.apply_filter_into(tag, now, &mut effects);
            }
            Message::ViewportChanged(viewport) => {
                self.viewport = Some(viewport);
                self.refresh_proximity(&mut effects);
            }
            Message::ItemNear(id) => self.load_if_near(id, &mut effects),
            Message::ItemImageFetched {
                binding,
                id,
                result,
            } => {
                if binding != self.binding {
                    tracing::trace!(item = %id, "dropping tile image from a previous catalog");
                    return effects;
                }
                let effect = self
                    .loader
                    .handle(lazy_loader::Message::FetchCompleted { id, result });
                if let lazy_loader::Effect::Loaded { id, path } = effect {
                    if let Some(image) = self.loader.image(id) {
                        self.cache.insert(path, image.clone());
                    }
                }
            }
            Message::OpenLightbox(id) => {
                self.lightbox_message(lightbox::Message::Open(id.index()), &mut effects);
            }
            Message::LightboxNext => {
                self.lightbox_message(lightbox::Message::Next, &mut effects);
            }
            Message::LightboxPrevious => {
                self.lightbox_message(lightbox::Message::Previous, &mut effects);
            }
            Message::LightboxClose | Message::BackdropClicked => {
                self.lightbox_message(lightbox::Message::Close, &mut effects);
            }
            Message::LightboxImageFetched {
                binding,
                token,
                path,
                result,
            } => {
                if binding != self.binding {
                    tracing::trace!(?token, "dropping lightbox image from a previous catalog");
                    return effects;
                }
                if let Ok(image) = &result {
                    self.cache.insert(path, image.clone());
                }
                self.lightbox_message(
                    lightbox::Message::ImageFetched { token, result },
                    &mut effects,
                );
            }
            Message::Key(action) => {
                if self.is_lightbox_open() {
                    let msg = match action {
                        KeyAction::Next => lightbox::Message::Next,
                        KeyAction::Previous => lightbox::Message::Previous,
                        KeyAction::Close => lightbox::Message::Close,
                    };
                    self.lightbox_message(msg, &mut effects);
                }
            }
            Message::Tick => {
                if self.visibility.handle(visibility::Message::Tick(now))
                    == visibility::Effect::LayoutChanged
                {
                    self.refresh_proximity(&mut effects);
                }
            }
        }
        effects
    }

    /// Applies `tag` and returns the visible count, or `None` when the
    /// filter controller is disabled.
    pub fn apply_filter(&mut self, tag: FilterTag, now: Instant) -> (Option<usize>, Vec<Effect>) {
        let mut effects = Vec::new();
        let visible = self.apply_filter_into(tag, now, &mut effects);
        (visible, effects)
    }

    fn apply_filter_into(
        &mut self,
        tag: FilterTag,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) -> Option<usize> {
        let Some(filter) = self.filter.as_mut() else {
            tracing::debug!(%tag, "filter controller disabled, ignoring selection");
            return None;
        };

        let filter::Effect::Applied {
            tag,
            matches,
            visible,
        } = filter.handle(filter::Message::Apply(tag), &self.items);

        let mut layout_changed = false;
        for (index, wanted) in matches.into_iter().enumerate() {
            let id = ItemId::new(index);
            let msg = if wanted {
                visibility::Message::Show { id, now }
            } else {
                visibility::Message::Hide { id, now }
            };
            layout_changed |= self.visibility.handle(msg) == visibility::Effect::LayoutChanged;
        }
        if layout_changed {
            self.refresh_proximity(effects);
        }

        effects.push(Effect::FilterChanged { tag, visible });
        Some(visible)
    }

    /// Runs the proximity observer and the lookahead sweep against the
    /// current viewport.
    fn refresh_proximity(&mut self, effects: &mut Vec<Effect>) {
        let Some(viewport) = self.viewport else {
            return;
        };
        let rendered = self.visibility.rendered();
        let layout = self.settings.layout;

        let observed = self.observer.poll(&layout, &rendered, viewport);
        let swept: Vec<ItemId> = layout
            .above_lookahead(&rendered, viewport, self.settings.sweep_lookahead)
            .filter(|id| self.loader.load_state(*id) == ImageLoadState::NotLoaded)
            .collect();

        for id in observed.into_iter().chain(swept) {
            self.load_if_near(id, effects);
        }
    }

    fn load_if_near(&mut self, id: ItemId, effects: &mut Vec<Effect>) {
        self.observer.unobserve(id);
        if let lazy_loader::Effect::Fetch { id, path } = self.loader.load_if_near(id) {
            effects.push(Effect::FetchItemImage {
                binding: self.binding,
                id,
                path,
            });
        }
    }

    fn lightbox_message(&mut self, msg: lightbox::Message, effects: &mut Vec<Effect>) {
        let Some(lightbox) = self.lightbox.as_mut() else {
            tracing::debug!("lightbox disabled, ignoring {msg:?}");
            return;
        };

        let (index, token) = match lightbox.handle(msg) {
            lightbox::Effect::None => return,
            lightbox::Effect::Closed => {
                self.scroll.unlock();
                tracing::debug!("lightbox closed");
                return;
            }
            lightbox::Effect::Opened { index, token } => {
                self.scroll.lock();
                tracing::debug!(index, "lightbox opened");
                (index, token)
            }
            lightbox::Effect::Show { index, token } => (index, token),
        };

        let Some(item) = self.items.get(index) else {
            return;
        };
        let path = item.full_image_or_thumbnail().to_path_buf();
        match self.cache.get(&path) {
            Some(image) => {
                lightbox.handle(lightbox::Message::ImageFetched {
                    token,
                    result: Ok(image),
                });
            }
            None => effects.push(Effect::FetchLightboxImage {
                binding: self.binding,
                token,
                path,
            }),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn binding(&self) -> Binding {
        self.binding
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.get(id.index())
    }

    /// Catalog sections found missing at bind time.
    #[must_use]
    pub fn disabled_features(&self) -> &[&'static str] {
        &self.disabled
    }

    #[must_use]
    pub fn filter_controls(&self) -> Option<&[filter::FilterControl]> {
        self.filter.as_ref().map(filter::State::controls)
    }

    #[must_use]
    pub fn active_filter(&self) -> FilterTag {
        self.filter
            .as_ref()
            .map_or(FilterTag::All, |filter| filter.active().clone())
    }

    /// Items occupying a grid slot, in absolute order.
    #[must_use]
    pub fn rendered(&self) -> Vec<ItemId> {
        self.visibility.rendered()
    }

    #[must_use]
    pub fn presence(&self, id: ItemId) -> Option<visibility::Presence> {
        self.visibility.presence(id)
    }

    /// Number of items the active filter shows.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| {
                self.visibility
                    .presence(item.id)
                    .is_some_and(visibility::Presence::is_wanted)
            })
            .count()
    }

    /// Returns `true` when the "no results" message should be shown.
    #[must_use]
    pub fn shows_no_results(&self) -> bool {
        self.visible_count() == 0
    }

    #[must_use]
    pub fn opacity(&self, id: ItemId, now: Instant) -> f32 {
        self.visibility.opacity(id, now)
    }

    #[must_use]
    pub fn load_state(&self, id: ItemId) -> ImageLoadState {
        self.loader.load_state(id)
    }

    #[must_use]
    pub fn is_loading(&self, id: ItemId) -> bool {
        self.loader.is_loading(id)
    }

    /// Decoded high-resolution image for a tile, once loaded.
    #[must_use]
    pub fn tile_image(&self, id: ItemId) -> Option<&ImageData> {
        self.loader.image(id)
    }

    /// What the tile for `id` displays right now.
    #[must_use]
    pub fn tile_source(&self, id: ItemId) -> Option<TileImage<'_>> {
        let item = self.item(id)?;
        Some(match self.tile_image(id) {
            Some(image) => TileImage::Decoded(image),
            None => TileImage::Thumbnail(&item.thumbnail),
        })
    }

    #[must_use]
    pub fn is_lightbox_enabled(&self) -> bool {
        self.lightbox.is_some()
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.as_ref().is_some_and(lightbox::State::is_open)
    }

    #[must_use]
    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox.as_ref().and_then(lightbox::State::current_index)
    }

    /// View data for the open lightbox.
    #[must_use]
    pub fn lightbox_view(&self) -> Option<LightboxView<'_>> {
        let lightbox = self.lightbox.as_ref()?;
        let index = lightbox.current_index()?;
        let item = self.items.get(index)?;
        Some(LightboxView {
            item,
            index,
            total: self.items.len(),
            details: ProjectDetails::derive(&item.categories),
            display: lightbox.display(),
        })
    }

    #[must_use]
    pub fn page_scroll_enabled(&self) -> bool {
        self.scroll.is_enabled()
    }

    /// Returns `true` while show/hide transitions need ticks.
    #[must_use]
    pub fn has_pending_transitions(&self) -> bool {
        self.visibility.has_pending()
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.settings.layout
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[must_use]
    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }
}

/// Interval of the transition tick subscription.
pub const TICK_INTERVAL: Duration = Duration::from_millis(config::TRANSITION_TICK_MS);
