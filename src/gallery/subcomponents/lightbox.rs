// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigator sub-component.
//!
//! A two-state machine (closed/open) over the full, unfiltered item list.
//! Navigation wraps in both directions. Every time an item is shown a new
//! request token is issued for its high-resolution fetch; completions
//! carrying an older token are dropped.

use crate::error::Error;
use crate::media::ImageData;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide, so tokens stay unique when a new catalog is bound.
static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Monotonic id of a high-resolution fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// What the image area currently shows.
#[derive(Debug, Clone, Default)]
pub enum Display {
    /// Thumbnail shown dimmed while the high-resolution image loads.
    #[default]
    Placeholder,
    HighRes(ImageData),
    /// High-resolution load failed; the plain thumbnail is shown.
    Fallback,
}

impl Display {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Messages for the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    Open(usize),
    Next,
    Previous,
    Close,
    ImageFetched {
        token: RequestToken,
        result: Result<ImageData, Error>,
    },
}

/// Effects produced by the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// An item is now shown; fetch its high-resolution image under `token`.
    Show { index: usize, token: RequestToken },
    /// The lightbox was opened (page scroll should be locked).
    Opened { index: usize, token: RequestToken },
    /// The lightbox was closed (page scroll should be restored).
    Closed,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    item_count: usize,
    phase: Phase,
    token: RequestToken,
    display: Display,
}

impl State {
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match (msg, self.phase) {
            (Message::Open(index), Phase::Closed) => {
                if index >= self.item_count {
                    return Effect::None;
                }
                let token = self.render(index);
                Effect::Opened { index, token }
            }
            // Opening another item while open just shows it.
            (Message::Open(index), Phase::Open { .. }) => {
                if index >= self.item_count {
                    return Effect::None;
                }
                let token = self.render(index);
                Effect::Show { index, token }
            }
            (Message::Next, Phase::Open { index }) => {
                let next = (index + 1) % self.item_count;
                let token = self.render(next);
                Effect::Show { index: next, token }
            }
            (Message::Previous, Phase::Open { index }) => {
                let previous = (index + self.item_count - 1) % self.item_count;
                let token = self.render(previous);
                Effect::Show {
                    index: previous,
                    token,
                }
            }
            (Message::Close, Phase::Open { .. }) => {
                self.phase = Phase::Closed;
                self.display = Display::Placeholder;
                // Invalidate any fetch still in flight.
                self.token = RequestToken::next();
                Effect::Closed
            }
            (Message::ImageFetched { token, result }, Phase::Open { index }) => {
                if token != self.token {
                    tracing::trace!(?token, "dropping stale lightbox image");
                    return Effect::None;
                }
                self.display = match result {
                    Ok(image) => Display::HighRes(image),
                    Err(error) => {
                        tracing::warn!(index, %error, "high-resolution image failed, showing thumbnail");
                        Display::Fallback
                    }
                };
                Effect::None
            }
            // Everything else is inert while closed.
            (_, Phase::Closed) => Effect::None,
        }
    }

    fn render(&mut self, index: usize) -> RequestToken {
        self.phase = Phase::Open { index };
        self.display = Display::Placeholder;
        self.token = RequestToken::next();
        self.token
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    /// Index of the shown item, when open.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Open { index } => Some(index),
            Phase::Closed => None,
        }
    }

    #[must_use]
    pub fn display(&self) -> &Display {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_at(count: usize, index: usize) -> (State, RequestToken) {
        let mut state = State::new(count);
        match state.handle(Message::Open(index)) {
            Effect::Opened { token, .. } => (state, token),
            other => panic!("expected Opened, got {other:?}"),
        }
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255, 255, 255, 255])
    }

    #[test]
    fn starts_closed() {
        let state = State::new(3);
        assert!(!state.is_open());
        assert_eq!(state.current_index(), None);
    }

    #[test]
    fn open_sets_index_and_placeholder() {
        let (state, _) = open_at(12, 4);
        assert_eq!(state.current_index(), Some(4));
        assert!(state.display().is_placeholder());
    }

    #[test]
    fn open_out_of_range_or_empty_is_noop() {
        let mut state = State::new(3);
        assert_eq!(state.handle(Message::Open(3)), Effect::None);
        assert!(!state.is_open());

        let mut empty = State::new(0);
        assert_eq!(empty.handle(Message::Open(0)), Effect::None);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let (mut state, _) = open_at(12, 0);
        state.handle(Message::Previous);
        assert_eq!(state.current_index(), Some(11));
        state.handle(Message::Next);
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn next_then_previous_is_identity() {
        for start in 0..5 {
            let (mut state, _) = open_at(5, start);
            state.handle(Message::Next);
            state.handle(Message::Previous);
            assert_eq!(state.current_index(), Some(start));
        }
    }

    #[test]
    fn single_item_navigation_stays_put() {
        let (mut state, _) = open_at(1, 0);
        state.handle(Message::Next);
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn navigation_is_inert_while_closed() {
        let mut state = State::new(3);
        assert_eq!(state.handle(Message::Next), Effect::None);
        assert_eq!(state.handle(Message::Previous), Effect::None);
        assert_eq!(state.handle(Message::Close), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn fetched_image_replaces_placeholder() {
        let (mut state, token) = open_at(3, 1);
        state.handle(Message::ImageFetched {
            token,
            result: Ok(pixel()),
        });
        assert!(matches!(state.display(), Display::HighRes(_)));
    }

    #[test]
    fn failed_fetch_falls_back_to_thumbnail() {
        let (mut state, token) = open_at(3, 1);
        state.handle(Message::ImageFetched {
            token,
            result: Err(Error::Io("gone".into())),
        });
        assert!(matches!(state.display(), Display::Fallback));
    }

    #[test]
    fn stale_fetch_is_ignored_after_navigation() {
        let (mut state, first) = open_at(3, 0);
        state.handle(Message::Next);
        state.handle(Message::ImageFetched {
            token: first,
            result: Ok(pixel()),
        });
        assert!(state.display().is_placeholder());
        assert_eq!(state.current_index(), Some(1));
    }

    #[test]
    fn stale_fetch_is_ignored_after_reopen() {
        let (mut state, first) = open_at(3, 0);
        state.handle(Message::Close);
        let Effect::Opened { token: second, .. } = state.handle(Message::Open(0)) else {
            panic!("expected reopen");
        };
        assert_ne!(first, second);

        state.handle(Message::ImageFetched {
            token: first,
            result: Ok(pixel()),
        });
        assert!(state.display().is_placeholder());
    }

    #[test]
    fn tokens_differ_between_navigators() {
        let (first, token_a) = open_at(3, 0);
        let (mut second, token_b) = open_at(3, 0);
        assert_ne!(token_a, token_b);

        second.handle(Message::ImageFetched {
            token: token_a,
            result: Ok(pixel()),
        });
        assert!(second.display().is_placeholder());
        assert!(first.display().is_placeholder());
    }

    #[test]
    fn close_reports_closed() {
        let (mut state, _) = open_at(3, 2);
        assert_eq!(state.handle(Message::Close), Effect::Closed);
        assert!(!state.is_open());
    }
}
