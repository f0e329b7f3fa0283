// SPDX-License-Identifier: MPL-2.0
//! Per-item show/hide transitions.
//!
//! ```text
//!            show                 show delay
//! Removed ─────────▶ Entering ─────────────▶ Shown
//!    ▲                  │  ▲                   │
//!    │ hide delay       │  │ show              │ hide
//!    └──────────── Leaving ◀───────────────────┘
//! ```
//!
//! `Entering` and `Leaving` items occupy a layout slot; only `Removed`
//! items are out of layout. A hide followed quickly by a show cancels the
//! pending removal, and a reversed fade continues from the opacity it had
//! reached.

use crate::domain::gallery::ItemId;
use std::time::{Duration, Instant};

/// Presence phase of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Shown,
    Entering { since: Instant },
    Leaving { since: Instant },
    Removed,
}

impl Presence {
    /// Returns `true` while the item takes up a grid slot.
    #[must_use]
    pub fn in_layout(self) -> bool {
        !matches!(self, Self::Removed)
    }

    /// Returns `true` if the current filter wants this item visible.
    #[must_use]
    pub fn is_wanted(self) -> bool {
        matches!(self, Self::Shown | Self::Entering { .. })
    }

    #[must_use]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Entering { .. } | Self::Leaving { .. })
    }
}

/// Messages for the visibility sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Show { id: ItemId, now: Instant },
    Hide { id: ItemId, now: Instant },
    /// Advance timed transitions.
    Tick(Instant),
}

/// Effects produced by presence changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The set of items occupying layout slots changed.
    LayoutChanged,
}

/// Presence of every item, indexed by position.
#[derive(Debug, Clone)]
pub struct State {
    presence: Vec<Presence>,
    show_delay: Duration,
    hide_delay: Duration,
}

impl State {
    /// All `item_count` items start fully shown.
    #[must_use]
    pub fn new(item_count: usize, show_delay: Duration, hide_delay: Duration) -> Self {
        Self {
            presence: vec![Presence::Shown; item_count],
            show_delay,
            hide_delay,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Show { id, now } => {
                let current = self.opacity(id, now);
                let show_delay = self.show_delay;
                let Some(slot) = self.presence.get_mut(id.index()) else {
                    return Effect::None;
                };
                match *slot {
                    Presence::Shown | Presence::Entering { .. } => Effect::None,
                    Presence::Leaving { .. } => {
                        *slot = Presence::Entering {
                            since: backdate(now, show_delay, current),
                        };
                        Effect::None
                    }
                    Presence::Removed => {
                        *slot = Presence::Entering { since: now };
                        Effect::LayoutChanged
                    }
                }
            }
            Message::Hide { id, now } => {
                let current = self.opacity(id, now);
                let hide_delay = self.hide_delay;
                if let Some(slot) = self.presence.get_mut(id.index()) {
                    if slot.is_wanted() {
                        *slot = Presence::Leaving {
                            since: backdate(now, hide_delay, 1.0 - current),
                        };
                    }
                }
                Effect::None
            }
            Message::Tick(now) => {
                let mut layout_changed = false;
                for slot in &mut self.presence {
                    match *slot {
                        Presence::Entering { since }
                            if now.saturating_duration_since(since) >= self.show_delay =>
                        {
                            *slot = Presence::Shown;
                        }
                        Presence::Leaving { since }
                            if now.saturating_duration_since(since) >= self.hide_delay =>
                        {
                            *slot = Presence::Removed;
                            layout_changed = true;
                        }
                        _ => {}
                    }
                }
                if layout_changed {
                    Effect::LayoutChanged
                } else {
                    Effect::None
                }
            }
        }
    }

    #[must_use]
    pub fn presence(&self, id: ItemId) -> Option<Presence> {
        self.presence.get(id.index()).copied()
    }

    /// Items occupying a grid slot, in absolute order.
    #[must_use]
    pub fn rendered(&self) -> Vec<ItemId> {
        self.presence
            .iter()
            .enumerate()
            .filter(|(_, presence)| presence.in_layout())
            .map(|(index, _)| ItemId::new(index))
            .collect()
    }

    /// Returns `true` while any transition still needs ticks.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.presence.iter().any(|p| p.is_transitioning())
    }

    /// Opacity for rendering at `now`, from 0.0 (invisible) to 1.0.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn opacity(&self, id: ItemId, now: Instant) -> f32 {
        let progress = |since: Instant, delay: Duration| {
            if delay.is_zero() {
                1.0
            } else {
                (now.saturating_duration_since(since).as_secs_f32() / delay.as_secs_f32())
                    .clamp(0.0, 1.0)
            }
        };
        match self.presence(id) {
            Some(Presence::Shown) => 1.0,
            Some(Presence::Entering { since }) => progress(since, self.show_delay),
            Some(Presence::Leaving { since }) => 1.0 - progress(since, self.hide_delay),
            Some(Presence::Removed) | None => 0.0,
        }
    }
}

/// Start of a fade lasting `delay` that is `progress` complete at `now`.
fn backdate(now: Instant, delay: Duration, progress: f32) -> Instant {
    now.checked_sub(delay.mul_f32(progress.clamp(0.0, 1.0)))
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW: Duration = Duration::from_millis(50);
    const HIDE: Duration = Duration::from_millis(300);

    fn state(count: usize) -> State {
        State::new(count, SHOW, HIDE)
    }

    fn id(n: usize) -> ItemId {
        ItemId::new(n)
    }

    #[test]
    fn items_start_shown_and_in_layout() {
        let state = state(3);
        assert_eq!(state.rendered(), vec![id(0), id(1), id(2)]);
        assert!(!state.has_pending());
    }

    #[test]
    fn hidden_item_stays_in_layout_until_hide_delay() {
        let mut state = state(2);
        let t0 = Instant::now();
        state.handle(Message::Hide { id: id(0), now: t0 });

        assert!(matches!(state.presence(id(0)), Some(Presence::Leaving { .. })));
        assert_eq!(state.handle(Message::Tick(t0 + Duration::from_millis(250))), Effect::None);
        assert_eq!(state.rendered(), vec![id(0), id(1)]);

        assert_eq!(state.handle(Message::Tick(t0 + HIDE)), Effect::LayoutChanged);
        assert_eq!(state.rendered(), vec![id(1)]);
        assert!(!state.has_pending());
    }

    #[test]
    fn shown_item_enters_layout_immediately() {
        let mut state = state(1);
        let t0 = Instant::now();
        state.handle(Message::Hide { id: id(0), now: t0 });
        state.handle(Message::Tick(t0 + HIDE));
        assert!(state.rendered().is_empty());

        let t1 = t0 + Duration::from_secs(1);
        assert_eq!(state.handle(Message::Show { id: id(0), now: t1 }), Effect::LayoutChanged);
        assert_eq!(state.rendered(), vec![id(0)]);
        assert_eq!(state.opacity(id(0), t1), 0.0);

        state.handle(Message::Tick(t1 + SHOW));
        assert_eq!(state.presence(id(0)), Some(Presence::Shown));
        assert_eq!(state.opacity(id(0), t1 + SHOW), 1.0);
    }

    #[test]
    fn show_during_leave_cancels_removal() {
        let mut state = state(1);
        let t0 = Instant::now();
        state.handle(Message::Hide { id: id(0), now: t0 });
        state.handle(Message::Show { id: id(0), now: t0 + Duration::from_millis(100) });

        state.handle(Message::Tick(t0 + Duration::from_secs(5)));
        assert_eq!(state.presence(id(0)), Some(Presence::Shown));
    }

    #[test]
    fn show_during_leave_fades_in_from_current_opacity() {
        let mut state = state(1);
        let t0 = Instant::now();
        state.handle(Message::Hide { id: id(0), now: t0 });
        let t1 = t0 + Duration::from_millis(150);
        let before = state.opacity(id(0), t1);

        state.handle(Message::Show { id: id(0), now: t1 });
        let after = state.opacity(id(0), t1);
        assert!((after - before).abs() < 0.01, "{before} -> {after}");
        assert!(state.opacity(id(0), t1 + Duration::from_millis(10)) > after);
    }

    #[test]
    fn hide_during_enter_fades_out_from_current_opacity() {
        let mut state = state(1);
        let t0 = Instant::now();
        state.handle(Message::Hide { id: id(0), now: t0 });
        state.handle(Message::Tick(t0 + HIDE));
        let t1 = t0 + Duration::from_secs(1);
        state.handle(Message::Show { id: id(0), now: t1 });

        let t2 = t1 + Duration::from_millis(20);
        let before = state.opacity(id(0), t2);
        state.handle(Message::Hide { id: id(0), now: t2 });
        let after = state.opacity(id(0), t2);
        assert!((after - before).abs() < 0.01, "{before} -> {after}");
        assert!(state.opacity(id(0), t2 + Duration::from_millis(30)) < after);
    }

    #[test]
    fn repeated_show_keeps_entering_timestamp() {
        let mut state = state(1);
        let t0 = Instant::now();
        state.handle(Message::Hide { id: id(0), now: t0 });
        state.handle(Message::Tick(t0 + HIDE));
        state.handle(Message::Show { id: id(0), now: t0 + HIDE });
        let before = state.presence(id(0));

        state.handle(Message::Show { id: id(0), now: t0 + HIDE + Duration::from_millis(20) });
        assert_eq!(state.presence(id(0)), before);
    }

    #[test]
    fn hide_on_removed_item_is_noop() {
        let mut state = state(1);
        let t0 = Instant::now();
        state.handle(Message::Hide { id: id(0), now: t0 });
        state.handle(Message::Tick(t0 + HIDE));
        state.handle(Message::Hide { id: id(0), now: t0 + HIDE });
        assert_eq!(state.presence(id(0)), Some(Presence::Removed));
    }

    #[test]
    fn leaving_opacity_fades_out() {
        let mut state = state(1);
        let t0 = Instant::now();
        state.handle(Message::Hide { id: id(0), now: t0 });
        let halfway = state.opacity(id(0), t0 + Duration::from_millis(150));
        assert!((halfway - 0.5).abs() < 0.01);
    }

    #[test]
    fn out_of_range_ids_are_ignored() {
        let mut state = state(1);
        let now = Instant::now();
        assert_eq!(state.handle(Message::Show { id: id(9), now }), Effect::None);
        assert_eq!(state.presence(id(9)), None);
        assert_eq!(state.opacity(id(9), now), 0.0);
    }
}
