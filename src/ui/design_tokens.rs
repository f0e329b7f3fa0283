// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every gallery view.
//!
//! Colours, spacing, sizes and type scale live here so views never hard-code
//! raw values. Scales follow an 8px baseline grid.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_600: Color = Color::from_rgb(0.36, 0.38, 0.42);
    pub const GRAY_300: Color = Color::from_rgb(0.72, 0.74, 0.77);

    // Brand colors (teal scale)
    pub const BRAND_300: Color = Color::from_rgb(0.45, 0.8, 0.78);
    pub const BRAND_500: Color = Color::from_rgb(0.1, 0.6, 0.58);
    pub const BRAND_700: Color = Color::from_rgb(0.05, 0.42, 0.41);

    // Accent used for item badges
    pub const ACCENT_500: Color = Color::from_rgb(0.96, 0.62, 0.18);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Thumbnail shown while the high-resolution image loads.
    pub const PLACEHOLDER: f32 = 0.5;
    /// Lightbox backdrop.
    pub const BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Filter chip height.
    pub const CHIP_HEIGHT: f32 = 32.0;
    /// Round previous/next buttons in the lightbox.
    pub const NAV_BUTTON: f32 = 48.0;
    /// Close button in the lightbox corner.
    pub const CLOSE_BUTTON: f32 = 36.0;
    /// Width of the lightbox details column.
    pub const DETAILS_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading (gallery title, empty state).
    pub const TITLE_LG: f32 = 28.0;
    /// Lightbox item title.
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Badges and counters.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const TILE: Shadow = Shadow {
        color: iced::Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::PLACEHOLDER > 0.0 && opacity::PLACEHOLDER < 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP <= 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::NAV_BUTTON >= sizing::CLOSE_BUTTON);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }
}
