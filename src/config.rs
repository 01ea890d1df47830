// SPDX-License-Identifier: MPL-2.0
//! Timing configuration, loaded from and saved to a `settings.toml` file.
//!
//! All values are optional in the file; anything absent falls back to the
//! documented lifecycle defaults (10 ms enter delay, 3000 ms duration,
//! 500 ms exit transition).
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.default_duration_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::lifecycle::{
    Timing, DEFAULT_DURATION, DEFAULT_ENTER_DELAY, DEFAULT_EXIT_TRANSITION,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSnackbar";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Milliseconds before a mounted notification enters the shown state.
    #[serde(default)]
    pub enter_delay_ms: Option<u64>,
    /// Display duration in milliseconds when callers supply none.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    /// Milliseconds of exit transition before detaching.
    #[serde(default)]
    pub exit_transition_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enter_delay_ms: Some(DEFAULT_ENTER_DELAY.as_millis() as u64),
            default_duration_ms: Some(DEFAULT_DURATION.as_millis() as u64),
            exit_transition_ms: Some(DEFAULT_EXIT_TRANSITION.as_millis() as u64),
        }
    }
}

impl Config {
    /// Resolves the configured values into a [`Timing`], applying the
    /// lifecycle defaults for anything unset.
    #[must_use]
    pub fn timing(&self) -> Timing {
        Timing {
            enter_delay: self
                .enter_delay_ms
                .map_or(DEFAULT_ENTER_DELAY, Duration::from_millis),
            default_duration: self
                .default_duration_ms
                .map_or(DEFAULT_DURATION, Duration::from_millis),
            exit_transition: self
                .exit_transition_ms
                .map_or(DEFAULT_EXIT_TRANSITION, Duration::from_millis),
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
    fn save_and_load_round_trip_preserves_timings() {
        let config = Config {
            enter_delay_ms: Some(20),
            default_duration_ms: Some(4500),
            exit_transition_ms: Some(250),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.enter_delay_ms, config.enter_delay_ms);
        assert_eq!(loaded.default_duration_ms, config.default_duration_ms);
        assert_eq!(loaded.exit_transition_ms, config.exit_transition_ms);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.default_duration_ms, Some(3000));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_matches_lifecycle_defaults() {
        let timing = Config::default().timing();
        assert_eq!(timing, Timing::default());
    }

    #[test]
    fn unset_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("default_duration_ms = 1000").expect("parse");
        let timing = config.timing();

        assert_eq!(timing.default_duration, Duration::from_millis(1000));
        assert_eq!(timing.enter_delay, DEFAULT_ENTER_DELAY);
        assert_eq!(timing.exit_transition, DEFAULT_EXIT_TRANSITION);
    }
}
