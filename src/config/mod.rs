// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use webcam_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.interval_ms = Some(250);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::playback::{PlaybackConfig, PlaybackInterval};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "WebcamLens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the capture server.
    #[serde(default)]
    pub server_url: Option<String>,
    /// Basic authentication user, sent only together with `password`.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub auto_advance: Option<bool>,
    #[serde(default)]
    pub interval_ms: Option<u64>,
    #[serde(default)]
    pub show_mask_images: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: Some(DEFAULT_SERVER_URL.to_string()),
            username: None,
            password: None,
            auto_advance: Some(DEFAULT_AUTO_ADVANCE),
            interval_ms: Some(DEFAULT_INTERVAL_MS),
            show_mask_images: Some(DEFAULT_SHOW_MASK_IMAGES),
        }
    }
}

impl Config {
    /// Server URL with the built-in fallback applied.
    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Credentials are only usable as a pair.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(password)) => Some((user.as_str(), password.as_str())),
            _ => None,
        }
    }

    /// Initial playback inputs derived from the stored preferences.
    pub fn playback(&self) -> PlaybackConfig {
        PlaybackConfig {
            enabled: self.auto_advance.unwrap_or(DEFAULT_AUTO_ADVANCE),
            interval: self
                .interval_ms
                .map(PlaybackInterval::new)
                .unwrap_or_default(),
        }
    }

    pub fn show_mask_images(&self) -> bool {
        self.show_mask_images.unwrap_or(DEFAULT_SHOW_MASK_IMAGES)
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
            log::warn!("Ignoring invalid settings in {}: {}", path.display(), err);
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
