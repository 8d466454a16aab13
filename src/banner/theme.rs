// SPDX-License-Identifier: MPL-2.0
//! Banner themes.
//!
//! A theme is an enumerated visual style. It only selects colors; layout is
//! the renderer's business.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual style of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerTheme {
    /// Neutral system look (gray accent).
    #[default]
    System,
    /// Informational (blue).
    Info,
    /// Positive outcome (green).
    Success,
    /// Needs attention (orange).
    Warning,
    /// Something went wrong (red).
    Critical,
}

impl BannerTheme {
    /// All themes, in declaration order.
    pub const ALL: [BannerTheme; 5] = [
        BannerTheme::System,
        BannerTheme::Info,
        BannerTheme::Success,
        BannerTheme::Warning,
        BannerTheme::Critical,
    ];

    /// Returns the config / lookup name of this theme.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BannerTheme::System => "system",
            BannerTheme::Info => "info",
            BannerTheme::Success => "success",
            BannerTheme::Warning => "warning",
            BannerTheme::Critical => "critical",
        }
    }

    /// Returns the accent color used for the banner border.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            BannerTheme::System => palette::GRAY_400,
            BannerTheme::Info => palette::INFO_500,
            BannerTheme::Success => palette::SUCCESS_500,
            BannerTheme::Warning => palette::WARNING_500,
            BannerTheme::Critical => palette::CRITICAL_500,
        }
    }

    /// Returns the banner surface color.
    #[must_use]
    pub fn background(self) -> Color {
        match self {
            BannerTheme::System => palette::GRAY_50,
            BannerTheme::Info => palette::INFO_100,
            BannerTheme::Success => palette::SUCCESS_100,
            BannerTheme::Warning => palette::WARNING_100,
            BannerTheme::Critical => palette::CRITICAL_100,
        }
    }

    /// Returns the text color drawn on [`background`](Self::background).
    #[must_use]
    pub fn text(self) -> Color {
        palette::GRAY_900
    }
}

impl fmt::Display for BannerTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BannerTheme {
    type Err = Error;

    /// Looks a theme up by name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BannerTheme::ALL
            .into_iter()
            .find(|theme| theme.name() == wanted)
            .ok_or_else(|| Error::Config(format!("unknown banner theme: {}", s)))
    }
}
