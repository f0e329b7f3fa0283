// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock held while the lightbox is open.

/// Whether the page behind the lightbox may scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    enabled: bool,
    /// Value before the first `lock`, restored by `unlock`.
    saved: Option<bool>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            enabled: true,
            saved: None,
        }
    }
}

impl State {
    /// Disables scrolling, remembering the previous value. Nested locks keep
    /// the outermost saved value.
    pub fn lock(&mut self) {
        if self.saved.is_none() {
            self.saved = Some(self.enabled);
        }
        self.enabled = false;
    }

    /// Restores the value saved by `lock`. Without a prior lock this is a no-op.
    pub fn unlock(&mut self) {
        if let Some(previous) = self.saved.take() {
            self.enabled = previous;
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
