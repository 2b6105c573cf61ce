// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use player_view::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.fit_mode = Some("16x9".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.fit_mode, Some("16x9".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::domain::layout::FitMode;
use crate::domain::video::VolumePercent;
use crate::error::Result;
use crate::ui::state::TouchToggles;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use defaults::{DEFAULT_CLICK_DEBOUNCE_MS, DEFAULT_VOLUME_PERCENT, MAX_CLICK_DEBOUNCE_MS};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PlayerView";

/// Gesture switches as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub touch_enabled: bool,
    pub rotation_enabled: bool,
    pub translation_enabled: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_enabled: true,
            rotation_enabled: true,
            translation_enabled: true,
        }
    }
}

impl From<GestureConfig> for TouchToggles {
    fn from(config: GestureConfig) -> Self {
        Self {
            touch: config.touch_enabled,
            rotation: config.rotation_enabled,
            translation: config.translation_enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub fit_mode: Option<String>,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub click_debounce_ms: Option<u64>,
    #[serde(default)]
    pub looping: Option<bool>,
    #[serde(default)]
    pub volume: Option<u8>,
    #[serde(default)]
    pub record_dir: Option<PathBuf>,
    #[serde(default)]
    pub screenshot_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            fit_mode: Some(FitMode::default().as_str().to_string()),
            gesture: GestureConfig::default(),
            click_debounce_ms: Some(DEFAULT_CLICK_DEBOUNCE_MS),
            looping: Some(false),
            volume: Some(DEFAULT_VOLUME_PERCENT),
            record_dir: None,
            screenshot_dir: None,
        }
    }
}

impl Config {
    /// Stored fit mode, falling back to the default for unknown names.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        match self.fit_mode.as_deref().map(str::parse::<FitMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(err)) => {
                tracing::warn!(%err, "ignoring configured fit mode");
                FitMode::default()
            }
            None => FitMode::default(),
        }
    }

    /// Debounce interval for play clicks, clamped to a sane maximum.
    #[must_use]
    pub fn click_debounce(&self) -> Duration {
        let millis = self
            .click_debounce_ms
            .unwrap_or(DEFAULT_CLICK_DEBOUNCE_MS)
            .min(MAX_CLICK_DEBOUNCE_MS);
        Duration::from_millis(millis)
    }

    #[must_use]
    pub fn volume(&self) -> VolumePercent {
        VolumePercent::new(i32::from(self.volume.unwrap_or(DEFAULT_VOLUME_PERCENT)))
    }

    #[must_use]
    pub fn looping(&self) -> bool {
        self.looping.unwrap_or(false)
    }

    /// Directory for recordings; the platform video directory by default.
    #[must_use]
    pub fn record_dir(&self) -> PathBuf {
        self.record_dir
            .clone()
            .or_else(|| dirs::video_dir().map(|dir| dir.join(APP_NAME)))
            .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME))
    }

    /// Directory for screenshots; the platform picture directory by default.
    #[must_use]
    pub fn screenshot_dir(&self) -> PathBuf {
        self.screenshot_dir
            .clone()
            .or_else(|| dirs::picture_dir().map(|dir| dir.join(APP_NAME)))
            .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME))
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
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
