// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode and the directory holding slide images
//! - `[carousel]` - Autoplay cadence and swipe sensitivity
//! - `[accordion]` - Deep-link and scroll delays
//! - `[contact]` - WhatsApp target and message limits
//! - `[reveal]` - Whether entrance animations run and how long banners stay
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` or the `LEXFOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lexfolio::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("en-US".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "pt-BR", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Directory containing the slide and portrait images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            media_dir: None,
        }
    }
}

/// Carousel behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    #[serde(
        default = "default_autoplay_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_interval_ms: Option<u64>,

    #[serde(
        default = "default_resume_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub resume_delay_ms: Option<u64>,

    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval_ms(),
            resume_delay_ms: default_resume_delay_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
        }
    }
}

impl CarouselConfig {
    /// Autoplay interval clamped to the supported range.
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        let ms = self
            .autoplay_interval_ms
            .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
            .clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms.unwrap_or(DEFAULT_RESUME_DELAY_MS))
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold_px
            .filter(|px| *px > 0.0)
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Accordion timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccordionConfig {
    #[serde(
        default = "default_deep_link_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub deep_link_delay_ms: Option<u64>,

    #[serde(
        default = "default_scroll_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_delay_ms: Option<u64>,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            deep_link_delay_ms: default_deep_link_delay_ms(),
            scroll_delay_ms: default_scroll_delay_ms(),
        }
    }
}

impl AccordionConfig {
    #[must_use]
    pub fn deep_link_delay(&self) -> Duration {
        Duration::from_millis(
            self.deep_link_delay_ms
                .unwrap_or(DEFAULT_DEEP_LINK_DELAY_MS),
        )
    }

    #[must_use]
    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms.unwrap_or(DEFAULT_SCROLL_DELAY_MS))
    }
}

/// Contact form target and limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Number receiving consultations, digits only with country code.
    #[serde(
        default = "default_whatsapp_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub whatsapp_number: Option<String>,

    #[serde(default = "default_email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(
        default = "default_max_message_chars",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_message_chars: Option<usize>,

    #[serde(
        default = "default_reset_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_delay_ms: Option<u64>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            email: default_email(),
            max_message_chars: default_max_message_chars(),
            reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

impl ContactConfig {
    #[must_use]
    pub fn whatsapp_number(&self) -> &str {
        self.whatsapp_number
            .as_deref()
            .unwrap_or(DEFAULT_WHATSAPP_NUMBER)
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or(DEFAULT_CONTACT_EMAIL)
    }

    #[must_use]
    pub fn max_message_chars(&self) -> usize {
        self.max_message_chars.unwrap_or(DEFAULT_MAX_MESSAGE_CHARS)
    }

    #[must_use]
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms.unwrap_or(DEFAULT_FORM_RESET_DELAY_MS))
    }
}

/// Entrance animations and transient banners.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealConfig {
    /// When false every element starts revealed and nothing animates.
    #[serde(default = "default_animations", skip_serializing_if = "Option::is_none")]
    pub animations: Option<bool>,

    #[serde(
        default = "default_notification_dismiss_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub notification_dismiss_ms: Option<u64>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            animations: default_animations(),
            notification_dismiss_ms: default_notification_dismiss_ms(),
        }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn animations_enabled(&self) -> bool {
        self.animations.unwrap_or(true)
    }

    #[must_use]
    pub fn notification_dismiss(&self) -> Duration {
        Duration::from_millis(
            self.notification_dismiss_ms
                .unwrap_or(DEFAULT_NOTIFICATION_DISMISS_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub accordion: AccordionConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub reveal: RevealConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_autoplay_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_resume_delay_ms() -> Option<u64> {
    Some(DEFAULT_RESUME_DELAY_MS)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_deep_link_delay_ms() -> Option<u64> {
    Some(DEFAULT_DEEP_LINK_DELAY_MS)
}

fn default_scroll_delay_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_DELAY_MS)
}

fn default_whatsapp_number() -> Option<String> {
    Some(DEFAULT_WHATSAPP_NUMBER.to_string())
}

fn default_email() -> Option<String> {
    Some(DEFAULT_CONTACT_EMAIL.to_string())
}

fn default_max_message_chars() -> Option<usize> {
    Some(DEFAULT_MAX_MESSAGE_CHARS)
}

fn default_reset_delay_ms() -> Option<u64> {
    Some(DEFAULT_FORM_RESET_DELAY_MS)
}

fn default_animations() -> Option<bool> {
    Some(true)
}

fn default_notification_dismiss_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DISMISS_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
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
/// default config with the i18n key of a warning notification.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        config.general.theme_mode = ThemeMode::Light;
        config.carousel.autoplay_interval_ms = Some(7000);
        config.contact.whatsapp_number = Some("5511999990000".to_string());

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[carousel\n").expect("write failed");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[contact]\nmax_message_chars = 200\n").expect("write failed");

        let loaded = load_from_path(&config_path).expect("load failed");

        assert_eq!(loaded.contact.max_message_chars(), 200);
        assert_eq!(loaded.contact.whatsapp_number(), DEFAULT_WHATSAPP_NUMBER);
        assert_eq!(
            loaded.carousel.autoplay_interval(),
            Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn autoplay_interval_is_clamped() {
        let config = CarouselConfig {
            autoplay_interval_ms: Some(10),
            ..CarouselConfig::default()
        };
        assert_eq!(
            config.autoplay_interval(),
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse failed");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn non_positive_swipe_threshold_uses_default() {
        let config = CarouselConfig {
            swipe_threshold_px: Some(0.0),
            ..CarouselConfig::default()
        };
        assert_eq!(config.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD_PX);
    }
}
