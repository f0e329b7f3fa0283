// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop and position counter.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed full-window backdrop behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// "3 / 12" counter shown above the lightbox image.
pub fn counter(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.6, ..BLACK })),
        text_color: Some(WHITE),
        border: Border {
            color: Color { a: 0.2, ..WHITE },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
