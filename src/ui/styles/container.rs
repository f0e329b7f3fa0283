// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface behind a grid tile.
///
/// `alpha` carries the tile's show/hide opacity so fading tiles take their
/// surface and text with them.
pub fn tile(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let base = extended.background.weak.color;
        let text = extended.background.weak.text;

        container::Style {
            background: Some(Background::Color(Color { a: base.a * alpha, ..base })),
            text_color: Some(Color { a: text.a * alpha, ..text }),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                color: Color {
                    a: shadow::TILE.color.a * alpha,
                    ..shadow::TILE.color
                },
                ..shadow::TILE
            },
            ..Default::default()
        }
    }
}

/// Category badge in the tile corner.
pub fn badge(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::ACCENT_500
        })),
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Details column of the lightbox.
pub fn details_panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        text_color: Some(extended.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Banner above the page for config/state warnings.
pub fn warning_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ACCENT_500)),
        text_color: Some(palette::BLACK),
        ..Default::default()
    }
}
