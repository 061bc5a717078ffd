// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[navigation]` - Section scroll offset and smooth-scroll duration
//! - `[navbar]` - Scroll threshold for the condensed navbar style
//! - `[parallax]` - Hero parallax toggle, rate, and width breakpoint
//! - `[notifications]` - In-flight warning watermark
//!
//! Every field is optional. Missing fields take the defaults from [`defaults`],
//! and out-of-range values are clamped when read through the accessors.
//!
//! # Examples
//!
//! ```no_run
//! use storefront_fx::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let offset = config.navigation.scroll_offset();
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning surfaced to the user when the settings file cannot be read.
pub const LOAD_WARNING: &str = "Settings could not be loaded. Using defaults.";

// =============================================================================
// Section Structs
// =============================================================================

/// Section navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Pixels kept above a section when scrolling to it.
    #[serde(default = "default_scroll_offset", skip_serializing_if = "Option::is_none")]
    pub scroll_offset: Option<f32>,

    /// Smooth-scroll duration in milliseconds.
    #[serde(
        default = "default_smooth_scroll_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub smooth_scroll_ms: Option<u64>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_offset: default_scroll_offset(),
            smooth_scroll_ms: default_smooth_scroll_ms(),
        }
    }
}

impl NavigationConfig {
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
            .unwrap_or(DEFAULT_SCROLL_OFFSET)
            .clamp(MIN_SCROLL_OFFSET, MAX_SCROLL_OFFSET)
    }

    #[must_use]
    pub fn smooth_scroll_duration(&self) -> Duration {
        let ms = self
            .smooth_scroll_ms
            .unwrap_or(DEFAULT_SMOOTH_SCROLL_MS)
            .clamp(MIN_SMOOTH_SCROLL_MS, MAX_SMOOTH_SCROLL_MS);
        Duration::from_millis(ms)
    }
}

/// Navbar appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavbarConfig {
    /// Scroll distance after which the navbar switches to its scrolled style.
    #[serde(
        default = "default_navbar_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub scrolled_threshold: Option<f32>,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: default_navbar_threshold(),
        }
    }
}

impl NavbarConfig {
    #[must_use]
    pub fn scrolled_threshold(&self) -> f32 {
        self.scrolled_threshold
            .unwrap_or(DEFAULT_NAVBAR_THRESHOLD)
            .clamp(MIN_NAVBAR_THRESHOLD, MAX_NAVBAR_THRESHOLD)
    }
}

/// Hero parallax settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallaxConfig {
    #[serde(default = "default_parallax_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Hero translation per scrolled pixel (negative moves against the scroll).
    #[serde(default = "default_parallax_rate", skip_serializing_if = "Option::is_none")]
    pub rate: Option<f32>,

    /// Viewport width at or below which parallax is suspended.
    #[serde(
        default = "default_parallax_min_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_width: Option<f32>,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            enabled: default_parallax_enabled(),
            rate: default_parallax_rate(),
            min_width: default_parallax_min_width(),
        }
    }
}

impl ParallaxConfig {
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    #[must_use]
    pub fn rate(&self) -> f32 {
        self.rate
            .unwrap_or(DEFAULT_PARALLAX_RATE)
            .clamp(MIN_PARALLAX_RATE, MAX_PARALLAX_RATE)
    }

    #[must_use]
    pub fn min_width(&self) -> f32 {
        self.min_width.unwrap_or(DEFAULT_PARALLAX_MIN_WIDTH).max(0.0)
    }
}

/// Notification settings. Lifecycle timing is fixed and not listed here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Attached toasts above which a warning is logged.
    #[serde(default = "default_warn_in_flight", skip_serializing_if = "Option::is_none")]
    pub warn_in_flight: Option<usize>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            warn_in_flight: default_warn_in_flight(),
        }
    }
}

impl NotificationsConfig {
    #[must_use]
    pub fn warn_in_flight(&self) -> usize {
        self.warn_in_flight
            .unwrap_or(DEFAULT_WARN_IN_FLIGHT)
            .clamp(MIN_WARN_IN_FLIGHT, MAX_WARN_IN_FLIGHT)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub navbar: NavbarConfig,

    #[serde(default)]
    pub parallax: ParallaxConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_scroll_offset() -> Option<f32> {
    Some(DEFAULT_SCROLL_OFFSET)
}

fn default_smooth_scroll_ms() -> Option<u64> {
    Some(DEFAULT_SMOOTH_SCROLL_MS)
}

fn default_navbar_threshold() -> Option<f32> {
    Some(DEFAULT_NAVBAR_THRESHOLD)
}

fn default_parallax_enabled() -> Option<bool> {
    Some(true)
}

fn default_parallax_rate() -> Option<f32> {
    Some(DEFAULT_PARALLAX_RATE)
}

fn default_parallax_min_width() -> Option<f32> {
    Some(DEFAULT_PARALLAX_MIN_WIDTH)
}

fn default_warn_in_flight() -> Option<usize> {
    Some(DEFAULT_WARN_IN_FLIGHT)
}

// =============================================================================
// Path Helpers
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message suitable for a notification.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "settings loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings ignored");
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
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
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.navigation.scroll_offset(), 70.0);
        assert_eq!(
            config.navigation.smooth_scroll_duration(),
            Duration::from_millis(500)
        );
        assert_eq!(config.navbar.scrolled_threshold(), 50.0);
        assert!(config.parallax.enabled());
        assert_eq!(config.parallax.rate(), -0.5);
        assert_eq!(config.parallax.min_width(), 768.0);
        assert_eq!(config.notifications.warn_in_flight(), 8);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            navigation: NavigationConfig {
                scroll_offset: Some(90.0),
                smooth_scroll_ms: Some(250),
            },
            parallax: ParallaxConfig {
                enabled: Some(false),
                ..ParallaxConfig::default()
            },
            ..Config::default()
        };

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        save_to_path(&config, &config_path).expect("save should succeed");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[navbar]\nscrolled_threshold = 120.0\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.navbar.scrolled_threshold(), 120.0);
        assert_eq!(loaded.navigation.scroll_offset(), DEFAULT_SCROLL_OFFSET);
        assert_eq!(loaded.parallax.rate(), DEFAULT_PARALLAX_RATE);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            navigation: NavigationConfig {
                scroll_offset: Some(-20.0),
                smooth_scroll_ms: Some(60_000),
            },
            parallax: ParallaxConfig {
                rate: Some(-4.0),
                ..ParallaxConfig::default()
            },
            notifications: NotificationsConfig {
                warn_in_flight: Some(0),
            },
            ..Config::default()
        };

        assert_eq!(config.navigation.scroll_offset(), MIN_SCROLL_OFFSET);
        assert_eq!(
            config.navigation.smooth_scroll_duration(),
            Duration::from_millis(MAX_SMOOTH_SCROLL_MS)
        );
        assert_eq!(config.parallax.rate(), MIN_PARALLAX_RATE);
        assert_eq!(config.notifications.warn_in_flight(), MIN_WARN_IN_FLIGHT);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[navbar\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("save should succeed");
        assert!(config_path.exists());
    }
}
