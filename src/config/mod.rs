// SPDX-License-Identifier: MPL-2.0
//! This module handles the banner configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - How many banners may be visible at once and where they attach
//! - `[appearance]` - Theme applied to messages that do not pick one
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()` / `save_with_override()`
//! 3. Set the `BANNER_OVERLAY_CONFIG_DIR` environment variable
//! 4. Falls back to the platform config directory (via `dirs`)
//!
//! # Examples
//!
//! ```no_run
//! use banner_overlay::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Allow two banners side by side
//! config.display.capacity = Some(2);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::banner::{BannerPosition, BannerTheme};
use crate::domain::DisplayCapacity;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Section Structs
// =============================================================================

/// Display policy settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Number of banners visible at once (clamped to the supported range).
    #[serde(default = "default_capacity", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,

    /// Screen edge banners attach to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<BannerPosition>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            position: Some(BannerPosition::default()),
        }
    }
}

/// Appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Theme for messages built without an explicit theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_theme: Option<BannerTheme>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            default_theme: Some(BannerTheme::default()),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Banner configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Returns the validated display capacity.
    #[must_use]
    pub fn capacity(&self) -> DisplayCapacity {
        self.display
            .capacity
            .map(DisplayCapacity::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn position(&self) -> BannerPosition {
        self.display.position.unwrap_or_default()
    }

    #[must_use]
    pub fn default_theme(&self) -> BannerTheme {
        self.appearance.default_theme.unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_capacity() -> Option<usize> {
    Some(DEFAULT_DISPLAY_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then environment, then platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default banner config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
