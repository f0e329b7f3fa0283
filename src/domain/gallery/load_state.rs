// SPDX-License-Identifier: MPL-2.0
//! Per-image load state.

/// Lifecycle of a lazily loaded image.
///
/// ```text
/// NotLoaded ──near──▶ Loading ──ok──▶ Loaded
///                        └────err──▶ Failed
/// ```
///
/// `Loaded` and `Failed` are terminal: nothing resets a slot to `NotLoaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

impl ImageLoadState {
    /// Returns `true` once a fetch has been started for this slot.
    #[must_use]
    pub fn has_started(self) -> bool {
        !matches!(self, Self::NotLoaded)
    }

    /// Returns `true` while the loading indicator should be shown.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` for `Loaded` and `Failed`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Loaded | Self::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_loaded() {
        let state = ImageLoadState::default();
        assert_eq!(state, ImageLoadState::NotLoaded);
        assert!(!state.has_started());
        assert!(!state.is_loading());
    }

    #[test]
    fn loading_shows_indicator() {
        assert!(ImageLoadState::Loading.has_started());
        assert!(ImageLoadState::Loading.is_loading());
        assert!(!ImageLoadState::Loading.is_terminal());
    }

    #[test]
    fn loaded_and_failed_are_terminal() {
        assert!(ImageLoadState::Loaded.is_terminal());
        assert!(ImageLoadState::Failed.is_terminal());
        assert!(!ImageLoadState::Failed.is_loading());
    }
}
