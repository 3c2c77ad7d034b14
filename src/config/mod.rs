// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving the alert timing preferences to a `settings.toml` file.
//!
//! Only two durations are configurable: the hold time before an alert starts
//! to leave (`display_ms`) and the fade transition length (`fade_ms`). The
//! fade value is shared between the timer scheduler and the banner styling so
//! the rendered transition can never drift from the removal timing.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedAlerts";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Hold time in milliseconds before the exit transition starts.
    #[serde(default)]
    pub display_ms: Option<u64>,
    /// Fade transition length in milliseconds, entrance and exit alike.
    #[serde(default)]
    pub fade_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_ms: Some(DEFAULT_DISPLAY_MS),
            fade_ms: Some(DEFAULT_FADE_MS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_durations() {
        let config = Config {
            display_ms: Some(2500),
            fade_ms: Some(300),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.display_ms, config.display_ms);
        assert_eq!(loaded.fade_ms, config.fade_ms);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.display_ms, Some(DEFAULT_DISPLAY_MS));
        assert_eq!(loaded.fade_ms, Some(DEFAULT_FADE_MS));
    }

    #[test]
    fn load_from_path_errors_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("missing.toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            display_ms: Some(1000),
            fade_ms: Some(250),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_sets_both_durations() {
        let config = Config::default();
        assert_eq!(config.display_ms, Some(DEFAULT_DISPLAY_MS));
        assert_eq!(config.fade_ms, Some(DEFAULT_FADE_MS));
    }

    #[test]
    fn partial_file_leaves_missing_fields_unset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "display_ms = 800\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.display_ms, Some(800));
        assert_eq!(loaded.fade_ms, None);
    }
}
