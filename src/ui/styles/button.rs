// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (empty state "open catalog").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_300,
        button::Status::Disabled => palette::GRAY_300,
        button::Status::Active | button::Status::Pressed => palette::BRAND_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::BRAND_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Filter chip. The active filter renders as pressed.
pub fn filter_chip(pressed: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let hovered = matches!(status, button::Status::Hovered);

        let (background, text_color, border_color) = if pressed {
            (palette::BRAND_500, WHITE, palette::BRAND_700)
        } else if hovered {
            (
                extended.background.weak.color,
                extended.background.base.text,
                palette::BRAND_300,
            )
        } else {
            (
                extended.background.base.color,
                extended.background.base.text,
                extended.background.strong.color,
            )
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round navigation and close buttons drawn over the lightbox backdrop.
pub fn lightbox_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.8,
        button::Status::Pressed => opacity::OPAQUE,
        _ => 0.5,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            color: Color { a: 0.3, ..WHITE },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Invisible button wrapping a grid tile.
pub fn tile(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
