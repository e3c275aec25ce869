// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed full-window layer behind the gallery.
pub fn backdrop(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.backdrop)),
        text_color: Some(scheme.backdrop_text),
        ..Default::default()
    }
}

/// Gallery content panel. Opaque so clicks land on it, not on the backdrop.
pub fn gallery_panel(focused: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let border = if focused {
            Border {
                color: scheme.focus_ring,
                width: border::WIDTH_FOCUS,
                radius: radius::LG.into(),
            }
        } else {
            Border {
                radius: radius::LG.into(),
                ..Border::default()
            }
        };
        container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            text_color: Some(palette::WHITE),
            border,
            shadow: shadow::LG,
            ..Default::default()
        }
    }
}

/// Works grid card.
pub fn card(focused: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let border = if focused {
            Border {
                color: scheme.focus_ring,
                width: border::WIDTH_FOCUS,
                radius: radius::MD.into(),
            }
        } else {
            Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..scheme.text_secondary
                },
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            }
        };
        container::Style {
            background: Some(Background::Color(scheme.surface_secondary)),
            text_color: Some(scheme.text_primary),
            border,
            shadow: shadow::SM,
            ..Default::default()
        }
    }
}

/// Services dropdown surface.
pub fn dropdown(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(extended.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: extended.background.strong.color,
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Mobile navigation sheet; outlined while its container holds focus.
pub fn mobile_nav_panel(focused: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let border = if focused {
            Border {
                color: scheme.focus_ring,
                width: border::WIDTH_FOCUS,
                radius: radius::SM.into(),
            }
        } else {
            Border::default()
        };
        container::Style {
            background: Some(Background::Color(scheme.surface_secondary)),
            text_color: Some(scheme.text_primary),
            border,
            shadow: shadow::LG,
            ..Default::default()
        }
    }
}

/// Startup warning banner (unreadable settings, rejected `--content`).
pub fn warning_banner(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.warning)),
        text_color: Some(palette::BLACK),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Placeholder shown while an image loads or after it failed.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: Some(scheme.text_secondary),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}
