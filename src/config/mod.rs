// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, loaded from a `settings.toml`
//! file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language used to resolve string resources
//! - `[toast]` - Vertical offset, icon padding and display durations
//!
//! # Examples
//!
//! ```no_run
//! use nice_toast::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.toast.y_offset = Some(96.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

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
}

/// Toast placement and timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastSettings {
    /// Vertical offset from the window edge for top and bottom toasts.
    #[serde(default = "default_y_offset", skip_serializing_if = "Option::is_none")]
    pub y_offset: Option<f32>,

    /// Space between the theme icon and the message text.
    #[serde(
        default = "default_icon_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_padding: Option<f32>,

    /// Display time of a short toast in milliseconds.
    #[serde(
        default = "default_short_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_duration_ms: Option<u64>,

    /// Display time of a long toast in milliseconds.
    #[serde(
        default = "default_long_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_duration_ms: Option<u64>,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            y_offset: default_y_offset(),
            icon_padding: default_icon_padding(),
            short_duration_ms: default_short_duration_ms(),
            long_duration_ms: default_long_duration_ms(),
        }
    }
}

impl ToastSettings {
    /// Vertical offset, clamped to the supported range. Non-finite values
    /// fall back to the default.
    pub fn y_offset(&self) -> f32 {
        clamp_pixels(self.y_offset, DEFAULT_Y_OFFSET, MIN_Y_OFFSET, MAX_Y_OFFSET)
    }

    /// Icon padding, clamped to the supported range. Non-finite values fall
    /// back to the default.
    pub fn icon_padding(&self) -> f32 {
        clamp_pixels(
            self.icon_padding,
            DEFAULT_ICON_PADDING,
            MIN_ICON_PADDING,
            MAX_ICON_PADDING,
        )
    }

    pub fn short_duration(&self) -> Duration {
        clamp_duration(self.short_duration_ms.unwrap_or(DEFAULT_SHORT_DURATION_MS))
    }

    /// Long display time; never shorter than [`Self::short_duration`].
    pub fn long_duration(&self) -> Duration {
        clamp_duration(self.long_duration_ms.unwrap_or(DEFAULT_LONG_DURATION_MS))
            .max(self.short_duration())
    }
}

fn clamp_pixels(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    value
        .filter(|v| v.is_finite())
        .unwrap_or(default)
        .clamp(min, max)
}

fn clamp_duration(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS))
}

/// Toast configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toast: ToastSettings,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_y_offset() -> Option<f32> {
    Some(DEFAULT_Y_OFFSET)
}

fn default_icon_padding() -> Option<f32> {
    Some(DEFAULT_ICON_PADDING)
}

fn default_short_duration_ms() -> Option<u64> {
    Some(DEFAULT_SHORT_DURATION_MS)
}

fn default_long_duration_ms() -> Option<u64> {
    Some(DEFAULT_LONG_DURATION_MS)
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If the file exists but cannot
/// be read, the default config is returned with an i18n warning key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring {}: {}", path.display(), err);
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
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
