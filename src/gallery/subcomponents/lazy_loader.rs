// SPDX-License-Identifier: MPL-2.0
//! Lazy image loader sub-component.
//!
//! Tracks the load state of every item's high-resolution image. A fetch is
//! started the first time an item is reported near the viewport and never
//! again: success swaps the tile's image, failure just clears the loading
//! indicator and leaves the thumbnail in place.

use crate::domain::gallery::{GalleryItem, ImageLoadState, ItemId};
use crate::error::Error;
use crate::media::ImageData;
use std::path::PathBuf;

/// Messages for the lazy loader.
#[derive(Debug, Clone)]
pub enum Message {
    /// The item came within the proximity threshold.
    ItemNear(ItemId),
    /// A fetch started by this loader finished.
    FetchCompleted {
        id: ItemId,
        result: Result<ImageData, Error>,
    },
}

/// Effects produced by the lazy loader.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start an asynchronous fetch for `id`.
    Fetch { id: ItemId, path: PathBuf },
    /// The image for `id` was decoded and is now displayed.
    Loaded { id: ItemId, path: PathBuf },
}

#[derive(Debug, Clone)]
struct Slot {
    source: PathBuf,
    state: ImageLoadState,
    image: Option<ImageData>,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    slots: Vec<Slot>,
}

impl State {
    /// One slot per item, sourcing the full image or, lacking one, the thumbnail.
    #[must_use]
    pub fn new(items: &[GalleryItem]) -> Self {
        Self {
            slots: items
                .iter()
                .map(|item| Slot {
                    source: item.full_image_or_thumbnail().to_path_buf(),
                    state: ImageLoadState::NotLoaded,
                    image: None,
                })
                .collect(),
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ItemNear(id) => self.load_if_near(id),
            Message::FetchCompleted { id, result } => {
                let Some(slot) = self.slots.get_mut(id.index()) else {
                    return Effect::None;
                };
                if slot.state != ImageLoadState::Loading {
                    return Effect::None;
                }
                match result {
                    Ok(image) => {
                        slot.state = ImageLoadState::Loaded;
                        slot.image = Some(image);
                        Effect::Loaded {
                            id,
                            path: slot.source.clone(),
                        }
                    }
                    Err(error) => {
                        slot.state = ImageLoadState::Failed;
                        tracing::warn!(
                            item = %id,
                            path = %slot.source.display(),
                            %error,
                            "failed to load image"
                        );
                        Effect::None
                    }
                }
            }
        }
    }

    /// Starts the fetch for `id` unless one was already started.
    pub fn load_if_near(&mut self, id: ItemId) -> Effect {
        let Some(slot) = self.slots.get_mut(id.index()) else {
            return Effect::None;
        };
        if slot.state.has_started() {
            return Effect::None;
        }
        slot.state = ImageLoadState::Loading;
        tracing::debug!(item = %id, path = %slot.source.display(), "lazy fetch started");
        Effect::Fetch {
            id,
            path: slot.source.clone(),
        }
    }

    #[must_use]
    pub fn load_state(&self, id: ItemId) -> ImageLoadState {
        self.slots
            .get(id.index())
            .map_or(ImageLoadState::NotLoaded, |slot| slot.state)
    }

    /// Returns `true` while the loading indicator should be shown.
    #[must_use]
    pub fn is_loading(&self, id: ItemId) -> bool {
        self.load_state(id).is_loading()
    }

    /// The decoded image, once loaded.
    #[must_use]
    pub fn image(&self, id: ItemId) -> Option<&ImageData> {
        self.slots.get(id.index()).and_then(|slot| slot.image.as_ref())
    }
}
