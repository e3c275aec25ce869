// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Keyboard focus is tracked by the app rather than by Iced, so every style
//! that can be focused takes a `focused` flag and draws the focus ring itself.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn focus_border(theme: &Theme, rad: f32) -> Border {
    Border {
        color: ColorScheme::for_theme(theme).focus_ring,
        width: border::WIDTH_FOCUS,
        radius: rad.into(),
    }
}

/// Primary action button (card call to action).
pub fn primary(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => palette::PRIMARY_400,
            button::Status::Disabled => palette::GRAY_200,
            _ => palette::PRIMARY_500,
        };
        let border = if focused {
            focus_border(theme, radius::SM)
        } else {
            Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border,
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Round translucent control drawn over the gallery image (close, previous, next).
pub fn overlay_control(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_STRONG,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::OVERLAY_MEDIUM,
        };
        let border = if focused {
            focus_border(theme, radius::FULL)
        } else {
            Border {
                radius: radius::FULL.into(),
                ..Border::default()
            }
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Gallery thumbnail; the active one is outlined in the brand color.
pub fn thumbnail(active: bool, focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let border = if focused {
            focus_border(theme, radius::SM)
        } else if active {
            Border {
                color: ColorScheme::for_theme(theme).brand_primary,
                width: border::WIDTH_FOCUS,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            }
        };
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            })),
            _ => None,
        };
        button::Style {
            background,
            text_color: WHITE,
            border,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Flat text button used for nav links and dropdown items.
pub fn link(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let background = match status {
            button::Status::Hovered => Some(extended.background.strong.color.into()),
            button::Status::Pressed => Some(extended.primary.strong.color.into()),
            _ => None,
        };
        let text_color = match status {
            button::Status::Pressed => extended.primary.strong.text,
            button::Status::Disabled => extended.background.weak.text,
            _ => extended.background.base.text,
        };
        let border = if focused {
            focus_border(theme, radius::SM)
        } else {
            Border {
                radius: radius::SM.into(),
                ..Border::default()
            }
        };
        button::Style {
            background,
            text_color,
            border,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Carousel position dot.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let color = if active || status == button::Status::Hovered {
            scheme.brand_primary
        } else {
            scheme.text_secondary
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_controls_draw_focus_ring() {
        let style = overlay_control(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.width, border::WIDTH_FOCUS);
        let style = overlay_control(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.width, 0.0);
    }

    #[test]
    fn active_thumbnail_uses_brand_outline() {
        let style = thumbnail(true, false)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.color, ColorScheme::light().brand_primary);
    }

    #[test]
    fn focus_wins_over_active_thumbnail() {
        let style = thumbnail(true, true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.color, ColorScheme::light().focus_ring);
    }
}
