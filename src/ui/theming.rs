// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color roles used by the custom styles.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub focus_ring: Color,

    pub warning: Color,

    pub backdrop: Color,
    pub backdrop_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,
            focus_ring: palette::PRIMARY_600,

            warning: palette::WARNING_500,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            backdrop_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.122, 0.161, 0.216),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            focus_ring: palette::PRIMARY_400,

            warning: palette::WARNING_500,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            backdrop_text: palette::WHITE,
        }
    }

    /// Picks the scheme matching the Iced theme in use.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// `System` asks the desktop through `dark-light`.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection errors count as dark.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn to_iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        assert!(ColorScheme::light().surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        assert!(ColorScheme::dark().surface_primary.r < 0.2);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert!(ColorScheme::for_theme(&Theme::Dark).surface_primary.r < 0.2);
        assert!(ColorScheme::for_theme(&Theme::Light).surface_primary.r > 0.9);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.to_iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_iced_theme(), Theme::Dark);
        // System depends on the host; just make sure it resolves.
        let _ = ThemeMode::System.to_iced_theme();
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let toml = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .expect("serialize");
        assert!(toml.contains("mode = \"dark\""));
        let parsed: Wrapper = toml::from_str("mode = \"system\"").expect("deserialize");
        assert_eq!(parsed.mode, ThemeMode::System);
    }
}
