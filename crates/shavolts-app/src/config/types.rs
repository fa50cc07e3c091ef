//! Settings types for the ShaVolts site
//!
//! Defines:
//! - `SiteSettings` - Root of `site.toml`
//! - One struct per table: `[site]`, `[motion]`, `[timers]`, `[logging]`

use serde::{Deserialize, Serialize};

/// Lower bound for any timer interval, in milliseconds
pub const MIN_TIMER_MS: u32 = 100;

/// Site settings (`site.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site: SiteInfo,

    #[serde(default)]
    pub motion: MotionSettings,

    #[serde(default)]
    pub timers: TimerSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Brand strings used by the shell
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteInfo {
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Placeholder of the header search overlay
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,

    /// Footer bottom-bar line
    #[serde(default = "default_copyright")]
    pub copyright: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            search_placeholder: default_search_placeholder(),
            copyright: default_copyright(),
        }
    }
}

fn default_brand() -> String {
    "ShaVolts".to_string()
}

fn default_search_placeholder() -> String {
    "Search shavolts.com".to_string()
}

fn default_copyright() -> String {
    "Copyright \u{a9} 2024 ShaVolts Inc. All rights reserved.".to_string()
}

/// Motion settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct MotionSettings {
    /// Follow the user's `prefers-reduced-motion` media query
    #[serde(default = "default_true")]
    pub respect_reduced_motion: bool,

    /// Treat every visitor as preferring reduced motion
    #[serde(default)]
    pub force_reduced_motion: bool,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            respect_reduced_motion: true,
            force_reduced_motion: false,
        }
    }
}

impl MotionSettings {
    /// Combine settings with what the browser reports
    pub fn reduced(&self, prefers_reduced: bool) -> bool {
        self.force_reduced_motion || (self.respect_reduced_motion && prefers_reduced)
    }
}

fn default_true() -> bool {
    true
}

/// Timer intervals, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimerSettings {
    #[serde(default = "default_clock_tick")]
    pub clock_tick_ms: u32,

    #[serde(default = "default_carousel_autoplay")]
    pub carousel_autoplay_ms: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            clock_tick_ms: default_clock_tick(),
            carousel_autoplay_ms: default_carousel_autoplay(),
        }
    }
}

fn default_clock_tick() -> u32 {
    1000
}

fn default_carousel_autoplay() -> u32 {
    5000
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub level: LogLevel,
}
