// SPDX-License-Identifier: MPL-2.0
//! Design tokens: palette, opacity, spacing, sizing, typography, borders,
//! radii and shadows.
//!
//! ```
//! use portfolio_lens::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::BACKDROP,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD;
//! # let _ = (backdrop, padding);
//! ```

use iced::Color;

/// Slate neutrals and the studio's teal accent.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    pub const PRIMARY_400: Color = Color::from_rgb(0.176, 0.831, 0.749);
    pub const PRIMARY_500: Color = Color::from_rgb(0.078, 0.722, 0.651);
    pub const PRIMARY_600: Color = Color::from_rgb(0.051, 0.580, 0.533);

    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
}

/// Alpha values for overlays and pressed states.
pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Dimmed page behind the gallery modal.
    pub const BACKDROP: f32 = 0.85;
}

/// Gaps and paddings on a 4 px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    /// Works grid card.
    pub const CARD_WIDTH: f32 = 300.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 200.0;

    /// Gallery strip thumbnail, square.
    pub const THUMBNAIL: f32 = 72.0;
    /// Minimum hit area for icon-like controls (WCAG 2.5.5).
    pub const HIT_TARGET: f32 = 44.0;

    pub const DROPDOWN_WIDTH: f32 = 260.0;
    pub const MOBILE_NAV_WIDTH: f32 = 320.0;
    /// Window width below which the header collapses into the menu button.
    pub const COMPACT_BREAKPOINT: f32 = 900.0;
    pub const TESTIMONIAL_MAX_WIDTH: f32 = 720.0;
}

pub mod typography {
    /// Page section headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Gallery title.
    pub const TITLE_MD: f32 = 20.0;
    /// Card titles.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Focus ring and active thumbnail outline.
    pub const WIDTH_FOCUS: f32 = 3.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Carousel dots and pill buttons.
    pub const FULL: f32 = 9999.0;
}

/// Card elevation and the gallery panel.
pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);

    assert!(sizing::THUMBNAIL >= sizing::HIT_TARGET);
    assert!(sizing::MOBILE_NAV_WIDTH < sizing::COMPACT_BREAKPOINT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_FOCUS > border::WIDTH_SM);
};
