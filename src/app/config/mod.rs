// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Swipe threshold, deferred focus delay, neighbour prefetch
//! - `[carousel]` - Testimonial auto-advance interval and reduced motion
//! - `[diagnostics]` - Event buffer capacity
//!
//! Every value is optional. Missing values fall back to the constants in
//! [`defaults`], and out-of-range values are clamped by the domain newtypes
//! returned from the section accessors.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. `PORTFOLIO_LENS_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use portfolio_lens::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.carousel.reduced_motion = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::ui::newtypes::{AutoAdvanceInterval, FocusDelay, SwipeThreshold};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when an existing file cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery viewer behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Horizontal travel in logical pixels for a touch to count as a swipe.
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Delay before the opened viewer focuses its container.
    #[serde(
        default = "default_initial_focus_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_focus_delay_ms: Option<u64>,

    /// Fetch the images on either side of the current one in the background.
    #[serde(
        default = "default_prefetch_neighbors",
        skip_serializing_if = "Option::is_none"
    )]
    pub prefetch_neighbors: Option<bool>,
}

impl GalleryConfig {
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.swipe_threshold_px
            .map(SwipeThreshold::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn initial_focus_delay(&self) -> FocusDelay {
        self.initial_focus_delay_ms
            .map(FocusDelay::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn prefetch_enabled(&self) -> bool {
        self.prefetch_neighbors.unwrap_or(true)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold_px(),
            initial_focus_delay_ms: default_initial_focus_delay_ms(),
            prefetch_neighbors: default_prefetch_neighbors(),
        }
    }
}

/// Testimonial carousel behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    #[serde(
        default = "default_auto_advance_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance_secs: Option<u32>,

    /// Disable auto-advance entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
}

impl CarouselConfig {
    #[must_use]
    pub fn auto_advance_interval(&self) -> AutoAdvanceInterval {
        self.auto_advance_secs
            .map(AutoAdvanceInterval::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.unwrap_or(false)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_secs: default_auto_advance_secs(),
            reduced_motion: Some(false),
        }
    }
}

/// Diagnostics collection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_initial_focus_delay_ms() -> Option<u64> {
    Some(DEFAULT_INITIAL_FOCUS_DELAY_MS)
}

fn default_prefetch_neighbors() -> Option<bool> {
    Some(true)
}

fn default_auto_advance_secs() -> Option<u32> {
    Some(DEFAULT_AUTO_ADVANCE_SECS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error; a file that exists but cannot be parsed yields the defaults and
/// the [`LOAD_ERROR_KEY`] warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some(LOAD_ERROR_KEY.to_string())),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_documented_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_abs_diff_eq!(config.gallery.swipe_threshold().value(), 50.0);
        assert_eq!(config.gallery.initial_focus_delay().value(), 100);
        assert!(config.gallery.prefetch_enabled());
        assert_eq!(config.carousel.auto_advance_interval().value(), 5);
        assert!(!config.carousel.reduced_motion());
        assert_eq!(config.diagnostics.buffer_capacity().value(), 1000);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            gallery: GalleryConfig {
                swipe_threshold_px: Some(80.0),
                initial_focus_delay_ms: Some(0),
                prefetch_neighbors: Some(false),
            },
            carousel: CarouselConfig {
                auto_advance_secs: Some(12),
                reduced_motion: Some(true),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(500),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_values_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[carousel]\nreduced_motion = true\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert!(loaded.carousel.reduced_motion());
        assert_eq!(loaded.carousel.auto_advance_secs, Some(DEFAULT_AUTO_ADVANCE_SECS));
        assert_eq!(loaded.gallery, GalleryConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped_by_accessors() {
        let config = Config {
            gallery: GalleryConfig {
                swipe_threshold_px: Some(1.0),
                initial_focus_delay_ms: Some(60_000),
                prefetch_neighbors: None,
            },
            carousel: CarouselConfig {
                auto_advance_secs: Some(0),
                reduced_motion: None,
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(1),
            },
            ..Config::default()
        };

        assert_abs_diff_eq!(
            config.gallery.swipe_threshold().value(),
            MIN_SWIPE_THRESHOLD_PX
        );
        assert_eq!(
            config.gallery.initial_focus_delay().value(),
            MAX_INITIAL_FOCUS_DELAY_MS
        );
        assert!(config.gallery.prefetch_enabled());
        assert_eq!(
            config.carousel.auto_advance_interval().value(),
            MIN_AUTO_ADVANCE_SECS
        );
        assert_eq!(
            config.diagnostics.buffer_capacity().value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn load_with_override_warns_on_corrupted_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_creates_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("deep").join("config");
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());

        save_with_override(&config, Some(base.clone())).expect("failed to save config");
        assert!(base.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    }
}
