// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The directory is the first of: an explicit override (tests), the
//! `--config-dir` argument, the `PORTFOLIO_LENS_CONFIG_DIR` environment
//! variable, then the platform config directory joined with `PortfolioLens`.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "PortfolioLens";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "PORTFOLIO_LENS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Which rule produced the config directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    Override,
    CommandLine,
    Environment,
    Platform,
}

/// Records the `--config-dir` argument. Only the first call is kept.
pub fn init_cli_overrides(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

/// Resolves the config directory and reports which rule won.
///
/// `None` only when no rule applies, e.g. a platform without a config
/// directory and nothing set explicitly.
pub fn resolve_config_dir(override_path: Option<PathBuf>) -> Option<(PathBuf, ConfigDirSource)> {
    if let Some(path) = override_path {
        return Some((path, ConfigDirSource::Override));
    }
    if let Some(path) = CLI_CONFIG_DIR.get().cloned().flatten() {
        return Some((path, ConfigDirSource::CommandLine));
    }
    match std::env::var_os(ENV_CONFIG_DIR) {
        Some(value) if !value.is_empty() => {
            return Some((PathBuf::from(value), ConfigDirSource::Environment));
        }
        _ => {}
    }
    dirs::config_dir().map(|base| (base.join(APP_DIR_NAME), ConfigDirSource::Platform))
}

/// Config directory, or `None` when it cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(override_path).map(|(path, _)| path)
}

/// Serializes tests that touch [`ENV_CONFIG_DIR`]; the environment is
/// process-wide and unit tests share one process.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::Mutex;
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_environment() {
        let _lock = env_lock();
        std::env::set_var(ENV_CONFIG_DIR, "/from/env");

        let resolved = resolve_config_dir(Some(PathBuf::from("/from/test")));
        assert_eq!(
            resolved,
            Some((PathBuf::from("/from/test"), ConfigDirSource::Override))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn environment_beats_platform_default() {
        let _lock = env_lock();
        std::env::set_var(ENV_CONFIG_DIR, "/from/env");

        assert_eq!(
            resolve_config_dir(None),
            Some((PathBuf::from("/from/env"), ConfigDirSource::Environment))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let _lock = env_lock();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some((path, source)) = resolve_config_dir(None) {
            assert_eq!(source, ConfigDirSource::Platform);
            assert!(path.ends_with(APP_DIR_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
