// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: loading and saving
//! user preferences to a `settings.toml` file, and resolving the effective
//! runtime settings from CLI flags, environment variables and that file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Prediction service base URL
//! - `[upload]` - Upload size ceiling
//!
//! # Precedence
//!
//! For the API URL and the upload ceiling, the first value found wins:
//! CLI flag, environment variable (`API_URL`, `MAX_FILE_SIZE`), config file,
//! built-in default.
//!
//! # Examples
//!
//! ```no_run
//! use synth_lens::config::{self, Overrides};
//!
//! let (config, _warning) = config::load();
//! let settings = config::resolve_from_env(&config, &Overrides::default());
//! println!("posting to {}", settings.api_url);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Prediction service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiConfig {
    /// Base URL; `/api/predict` is appended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Upload settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UploadConfig {
    /// Byte ceiling for a selected image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub upload: UploadConfig,
}

// =============================================================================
// Effective Settings
// =============================================================================

/// Values passed on the command line. They beat everything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub max_file_size: Option<u64>,
}

/// Runtime settings after precedence has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_url: String,
    pub max_file_size: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Resolves settings using the process environment.
pub fn resolve_from_env(config: &Config, overrides: &Overrides) -> Settings {
    resolve(config, overrides, |key| std::env::var(key).ok())
}

/// Resolves settings with an injectable environment lookup.
///
/// Empty strings are treated as unset. A size that does not parse as a
/// positive integer is ignored with a warning and the next source is used.
pub fn resolve<F>(config: &Config, overrides: &Overrides, env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let env_value = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let api_url = overrides
        .api_url
        .clone()
        .filter(|url| !url.trim().is_empty())
        .or_else(|| env_value(ENV_API_URL))
        .or_else(|| config.api.url.clone().filter(|url| !url.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let env_size = env_value(ENV_MAX_FILE_SIZE).and_then(|raw| match raw.parse::<u64>() {
        Ok(0) | Err(_) => {
            warn!("{ENV_MAX_FILE_SIZE}={raw:?} is not a positive byte count, ignoring");
            None
        }
        Ok(size) => Some(size),
    });

    let max_file_size = overrides
        .max_file_size
        .filter(|size| *size > 0)
        .or(env_size)
        .or(config.upload.max_file_size.filter(|size| *size > 0))
        .unwrap_or(DEFAULT_MAX_FILE_SIZE);

    debug!(%api_url, max_file_size, "resolved settings");

    Settings {
        api_url,
        max_file_size,
    }
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
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    warn!(path = %path.display(), "failed to load config: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
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
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            api: ApiConfig {
                url: Some("https://detector.example.com".to_string()),
            },
            upload: UploadConfig {
                max_file_size: Some(2_000_000),
            },
        };

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[api\nurl = ").expect("failed to write file");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("deeper").join("settings.toml");

        save_to_path(&Config::default(), &path).expect("failed to save config");

        assert!(path.exists());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "not = [valid").expect("failed to write file");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[upload]\nmax_file_size = 5000\n").expect("failed to write file");

        let config = load_from_path(&path).expect("failed to load config");

        assert_eq!(config.upload.max_file_size, Some(5000));
        assert_eq!(config.api.url, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn resolve_uses_defaults_when_nothing_is_set() {
        let settings = resolve(&Config::default(), &Overrides::default(), no_env);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.max_file_size, 10_485_760);
        assert_eq!(settings.api_url, "http://localhost:5000");
    }

    #[test]
    fn resolve_prefers_file_over_default() {
        let mut config = Config::default();
        config.api.url = Some("http://file:1".to_string());
        config.upload.max_file_size = Some(1024);

        let settings = resolve(&config, &Overrides::default(), no_env);

        assert_eq!(settings.api_url, "http://file:1");
        assert_eq!(settings.max_file_size, 1024);
    }

    #[test]
    fn resolve_prefers_env_over_file() {
        let mut config = Config::default();
        config.api.url = Some("http://file:1".to_string());
        config.upload.max_file_size = Some(1024);
        let env = env_from(&[(ENV_API_URL, "http://env:2"), (ENV_MAX_FILE_SIZE, "2048")]);

        let settings = resolve(&config, &Overrides::default(), env);

        assert_eq!(settings.api_url, "http://env:2");
        assert_eq!(settings.max_file_size, 2048);
    }

    #[test]
    fn resolve_prefers_cli_over_env() {
        let env = env_from(&[(ENV_API_URL, "http://env:2"), (ENV_MAX_FILE_SIZE, "2048")]);
        let overrides = Overrides {
            api_url: Some("http://cli:3".to_string()),
            max_file_size: Some(4096),
        };

        let settings = resolve(&Config::default(), &overrides, env);

        assert_eq!(settings.api_url, "http://cli:3");
        assert_eq!(settings.max_file_size, 4096);
    }

    #[test]
    fn resolve_ignores_invalid_or_zero_env_size() {
        let mut config = Config::default();
        config.upload.max_file_size = Some(1024);

        for raw in ["abc", "0", "-5", "  "] {
            let env = env_from(&[(ENV_MAX_FILE_SIZE, raw)]);
            let settings = resolve(&config, &Overrides::default(), env);
            assert_eq!(settings.max_file_size, 1024, "value {raw:?} should be ignored");
        }
    }

    #[test]
    fn resolve_ignores_empty_api_url() {
        let env = env_from(&[(ENV_API_URL, "")]);
        let settings = resolve(&Config::default(), &Overrides::default(), env);
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }
}
