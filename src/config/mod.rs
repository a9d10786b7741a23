// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and
//! saving embedder preferences to a `toast.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_duration_secs = Some(5.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::toast::{Category, Position};
use defaults::{
    DEFAULT_DURATION_SECS, DEFAULT_REACTIVE_TIME_SECS, DEFAULT_TICK_INTERVAL_MS,
    MAX_DURATION_SECS, MAX_TICK_INTERVAL_MS, MIN_DURATION_SECS, MIN_TICK_INTERVAL_MS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toast.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Display duration of imperative toasts (seconds).
    #[serde(default)]
    pub default_duration_secs: Option<f32>,
    /// Clear delay of reactive toasts (seconds).
    #[serde(default)]
    pub reactive_time_secs: Option<f32>,
    #[serde(default)]
    pub default_position: Option<Position>,
    #[serde(default)]
    pub default_category: Option<Category>,
    /// Expiry polling interval (milliseconds).
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_secs: Some(DEFAULT_DURATION_SECS),
            reactive_time_secs: Some(DEFAULT_REACTIVE_TIME_SECS),
            default_position: Some(Position::default()),
            default_category: Some(Category::default()),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl Config {
    /// Imperative display duration, clamped to the supported range.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let secs = self
            .default_duration_secs
            .unwrap_or(DEFAULT_DURATION_SECS)
            .clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        Duration::from_secs_f32(secs)
    }

    /// Reactive clear delay, clamped to the supported range.
    #[must_use]
    pub fn reactive_time(&self) -> Duration {
        let secs = self
            .reactive_time_secs
            .unwrap_or(DEFAULT_REACTIVE_TIME_SECS)
            .clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        Duration::from_secs_f32(secs)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.default_position.unwrap_or_default()
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.default_category.unwrap_or_default()
    }

    /// Expiry polling interval, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
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
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        log::warn!("invalid config at {}: {err}; using defaults", path.display());
        Config::default()
    }))
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
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            default_duration_secs: Some(5.0),
            reactive_time_secs: Some(2.0),
            default_position: Some(Position::Bottom),
            default_category: Some(Category::Success),
            tick_interval_ms: Some(50),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toast.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.default_duration_secs, Some(5.0));
        assert_eq!(loaded.reactive_time_secs, Some(2.0));
        assert_eq!(loaded.default_position, Some(Position::Bottom));
        assert_eq!(loaded.default_category, Some(Category::Success));
        assert_eq!(loaded.tick_interval_ms, Some(50));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toast.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.default_duration_secs, Some(DEFAULT_DURATION_SECS));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("toast.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_matches_the_constants() {
        let config = Config::default();
        assert_eq!(config.duration(), Duration::from_secs(3));
        assert_eq!(config.reactive_time(), Duration::from_millis(1500));
        assert_eq!(config.position(), Position::Center);
        assert_eq!(config.category(), Category::Error);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            default_duration_secs: Some(0.0),
            reactive_time_secs: Some(10_000.0),
            tick_interval_ms: Some(1),
            ..Config::default()
        };
        assert_eq!(config.duration(), Duration::from_secs_f32(MIN_DURATION_SECS));
        assert_eq!(
            config.reactive_time(),
            Duration::from_secs_f32(MAX_DURATION_SECS)
        );
        assert_eq!(
            config.tick_interval(),
            Duration::from_millis(MIN_TICK_INTERVAL_MS)
        );
    }
}
