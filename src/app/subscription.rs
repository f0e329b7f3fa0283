// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are mapped to application messages
//! here. Arrow keys and Escape reach the gallery only as [`KeyAction`]s; the
//! gallery ignores them while the lightbox is closed.

use super::Message;
use crate::gallery::{self, KeyAction};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};

/// Routes keyboard, resize and file drop events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match &event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path.clone())),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => key_action(key)
                .map(|action| Message::Gallery(gallery::Message::Key(action))),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Ticks only while show/hide transitions are in flight.
pub fn create_tick_subscription(has_pending_transitions: bool) -> Subscription<Message> {
    if has_pending_transitions {
        time::every(gallery::component::TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps a pressed key to a lightbox action.
#[must_use]
pub fn key_action(key: &Key) -> Option<KeyAction> {
    match key {
        Key::Named(Named::ArrowRight) => Some(KeyAction::Next),
        Key::Named(Named::ArrowLeft) => Some(KeyAction::Previous),
        Key::Named(Named::Escape) => Some(KeyAction::Close),
        _ => None,
    }
}
