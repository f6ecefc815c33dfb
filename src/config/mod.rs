// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[queue]` - Visible toast bound, timeouts and timer start policy
//! - `[display]` - Where the toast region is anchored
//!
//! # Path Resolution
//!
//! See [`paths`]: explicit override, `--config-dir`, `ICED_TOASTS_CONFIG_DIR`,
//! then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.queue.max_visible_toasts = Some(3);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use crate::queue::{QueueOptions, TimerStart, ToastOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Screen corner the toast region is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

/// Serialized form of [`TimerStart`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimerStartMode {
    #[default]
    OnAdd,
    OnVisible,
}

impl From<TimerStartMode> for TimerStart {
    fn from(mode: TimerStartMode) -> Self {
        match mode {
            TimerStartMode::OnAdd => TimerStart::OnAdd,
            TimerStartMode::OnVisible => TimerStart::OnVisible,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Queue behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueConfig {
    /// Maximum number of toasts displayed at once.
    #[serde(
        default = "default_max_visible_toasts",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_visible_toasts: Option<usize>,

    /// Shortest accepted auto-dismiss timeout (milliseconds).
    #[serde(
        default = "default_min_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_timeout_ms: Option<u64>,

    /// Timeout applied to toasts that do not request one (milliseconds).
    #[serde(
        default = "default_toast_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_timeout_ms: Option<u64>,

    /// Whether toasts dismiss themselves at all.
    #[serde(default = "default_auto_dismiss", skip_serializing_if = "Option::is_none")]
    pub auto_dismiss: Option<bool>,

    /// When auto-dismiss timers start counting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_start: Option<TimerStartMode>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_visible_toasts: default_max_visible_toasts(),
            min_timeout_ms: default_min_timeout_ms(),
            default_timeout_ms: default_toast_timeout_ms(),
            auto_dismiss: default_auto_dismiss(),
            timer_start: Some(TimerStartMode::default()),
        }
    }
}

/// Toast region display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DisplayConfig {
    /// Corner of the window holding the toasts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ToastPosition>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Toast configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Builds queue options, clamping out-of-range values.
    #[must_use]
    pub fn queue_options(&self) -> QueueOptions {
        let max_visible_toasts = self
            .queue
            .max_visible_toasts
            .unwrap_or(DEFAULT_MAX_VISIBLE_TOASTS)
            .clamp(MIN_MAX_VISIBLE_TOASTS, MAX_MAX_VISIBLE_TOASTS);
        let min_timeout_ms = self
            .queue
            .min_timeout_ms
            .unwrap_or(DEFAULT_MIN_TIMEOUT_MS)
            .min(MAX_MIN_TIMEOUT_MS);

        QueueOptions {
            max_visible_toasts,
            min_timeout: Duration::from_millis(min_timeout_ms),
            timer_start: self.queue.timer_start.unwrap_or_default().into(),
        }
    }

    /// Per-toast options used when the caller has no preference.
    #[must_use]
    pub fn default_toast_options(&self) -> ToastOptions {
        if !self.queue.auto_dismiss.unwrap_or(true) {
            return ToastOptions::default();
        }
        let timeout_ms = self
            .queue
            .default_timeout_ms
            .unwrap_or(DEFAULT_TOAST_TIMEOUT_MS)
            .min(MAX_TOAST_TIMEOUT_MS);
        ToastOptions::with_timeout(Duration::from_millis(timeout_ms))
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.display.position.unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_visible_toasts() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE_TOASTS)
}

fn default_min_timeout_ms() -> Option<u64> {
    Some(DEFAULT_MIN_TIMEOUT_MS)
}

fn default_toast_timeout_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_TIMEOUT_MS)
}

fn default_auto_dismiss() -> Option<bool> {
    Some(true)
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
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
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

/// Saves configuration to a specific path, creating parent directories.
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
    fn default_config_matches_defaults() {
        let config = Config::default();
        assert_eq!(
            config.queue.max_visible_toasts,
            Some(DEFAULT_MAX_VISIBLE_TOASTS)
        );
        assert_eq!(config.position(), ToastPosition::BottomRight);

        let options = config.queue_options();
        assert_eq!(options.max_visible_toasts, QueueOptions::default().max_visible_toasts);
        assert_eq!(options.timer_start, QueueOptions::default().timer_start);
        // The settings file keeps a readability floor the bare queue does not have
        assert_eq!(options.min_timeout, Duration::from_millis(DEFAULT_MIN_TIMEOUT_MS));
    }

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            queue: QueueConfig {
                max_visible_toasts: Some(2),
                timer_start: Some(TimerStartMode::OnVisible),
                ..QueueConfig::default()
            },
            display: DisplayConfig {
                position: Some(ToastPosition::TopLeft),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str("[queue]\nmax_visible_toasts = 3\n").expect("parse");
        assert_eq!(config.queue.max_visible_toasts, Some(3));
        assert_eq!(config.queue.min_timeout_ms, Some(DEFAULT_MIN_TIMEOUT_MS));
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn queue_options_clamp_out_of_range_values() {
        let config = Config {
            queue: QueueConfig {
                max_visible_toasts: Some(0),
                min_timeout_ms: Some(u64::MAX),
                ..QueueConfig::default()
            },
            ..Config::default()
        };
        let options = config.queue_options();
        assert_eq!(options.max_visible_toasts, MIN_MAX_VISIBLE_TOASTS);
        assert_eq!(options.min_timeout, Duration::from_millis(MAX_MIN_TIMEOUT_MS));

        let config = Config {
            queue: QueueConfig {
                max_visible_toasts: Some(1_000),
                ..QueueConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(
            config.queue_options().max_visible_toasts,
            MAX_MAX_VISIBLE_TOASTS
        );
    }

    #[test]
    fn timer_start_mode_maps_to_queue_policy() {
        let config = Config {
            queue: QueueConfig {
                timer_start: Some(TimerStartMode::OnVisible),
                ..QueueConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.queue_options().timer_start, TimerStart::OnVisible);
    }

    #[test]
    fn disabling_auto_dismiss_removes_default_timeout() {
        let config = Config {
            queue: QueueConfig {
                auto_dismiss: Some(false),
                ..QueueConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.default_toast_options().timeout, None);
        assert_eq!(
            Config::default().default_toast_options().timeout,
            Some(Duration::from_millis(DEFAULT_TOAST_TIMEOUT_MS))
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONFIG_FILE), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_position_is_rejected() {
        let result = toml::from_str::<Config>("[display]\nposition = \"middle\"\n");
        assert!(result.is_err());
    }
}
