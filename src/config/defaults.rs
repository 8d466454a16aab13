// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! This module is the single source of truth for defaults used by the
//! settings file and the banner manager.

use crate::domain::capacity_bounds;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default number of simultaneously visible banners.
pub const DEFAULT_DISPLAY_CAPACITY: usize = capacity_bounds::DEFAULT;

/// Minimum number of simultaneously visible banners.
pub const MIN_DISPLAY_CAPACITY: usize = capacity_bounds::MIN;

/// Maximum number of simultaneously visible banners.
pub const MAX_DISPLAY_CAPACITY: usize = capacity_bounds::MAX;

// ==========================================================================
// Paths
// ==========================================================================

/// Settings file name inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config directory.
pub const APP_NAME: &str = "BannerOverlay";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "BANNER_OVERLAY_CONFIG_DIR";
