// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, i.e. the defaults applied to
//! every `show` call that omits an option, loaded from and saved to a
//! `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config::{self, ToastConfig};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.group = Some("editor".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::toast::{ExitDelay, ToastDuration};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastQueue";

/// Store-wide defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Seconds before an auto-closing toast is hidden.
    pub duration_secs: f32,
    pub auto_close: bool,
    /// Group assigned to toasts shown without one.
    pub group: Option<String>,
    /// Exit animation window between close and purge.
    pub exit_delay_ms: u64,
    pub close_on_click: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            auto_close: DEFAULT_AUTO_CLOSE,
            group: None,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
            close_on_click: DEFAULT_CLOSE_ON_CLICK,
        }
    }
}

impl ToastConfig {
    /// Returns the default duration, clamped to its valid range.
    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        ToastDuration::clamped(self.duration_secs)
    }

    /// Returns the exit delay, clamped to its valid range.
    #[must_use]
    pub fn exit_delay(&self) -> ExitDelay {
        ExitDelay::new(self.exit_delay_ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file; malformed TOML falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid toast config, using defaults");
            Ok(ToastConfig::default())
        }
    }
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
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
    fn save_and_load_round_trip_preserves_group() {
        let config = ToastConfig {
            duration_secs: 5.0,
            auto_close: false,
            group: Some("uploads".to_string()),
            exit_delay_ms: 150,
            close_on_click: false,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, ToastConfig::default());
    }

    #[test]
    fn load_from_path_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "auto_close = false\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(!loaded.auto_close);
        assert_eq!(loaded.duration_secs, DEFAULT_DURATION_SECS);
        assert!(loaded.group.is_none());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn out_of_range_values_are_clamped_on_access() {
        let config = ToastConfig {
            duration_secs: 10_000.0,
            exit_delay_ms: 60_000,
            ..ToastConfig::default()
        };
        assert_eq!(config.duration().secs(), MAX_DURATION_SECS);
        assert_eq!(config.exit_delay().value(), MAX_EXIT_DELAY_MS);
    }
}
