//! Settings loading
//!
//! The site has no filesystem, so `site.toml` is compiled in and parsed once
//! at startup.

use shavolts_core::prelude::*;

use super::types::{SiteSettings, MIN_TIMER_MS};

/// Settings shipped with the site
pub const EMBEDDED_SETTINGS: &str = include_str!("../../site.toml");

/// Parse settings from TOML text and validate them
pub fn parse_settings(content: &str) -> Result<SiteSettings> {
    let mut settings: SiteSettings =
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
    validate_settings(&mut settings)?;
    Ok(settings)
}

/// Clamp timer intervals to [`MIN_TIMER_MS`] and reject an empty brand
fn validate_settings(settings: &mut SiteSettings) -> Result<()> {
    let timers = &mut settings.timers;
    if timers.clock_tick_ms < MIN_TIMER_MS {
        warn!(
            "clock_tick_ms = {} is below {}ms, clamping",
            timers.clock_tick_ms, MIN_TIMER_MS
        );
        timers.clock_tick_ms = MIN_TIMER_MS;
    }
    if timers.carousel_autoplay_ms < MIN_TIMER_MS {
        warn!(
            "carousel_autoplay_ms = {} is below {}ms, clamping",
            timers.carousel_autoplay_ms, MIN_TIMER_MS
        );
        timers.carousel_autoplay_ms = MIN_TIMER_MS;
    }
    if settings.site.brand.trim().is_empty() {
        return Err(Error::config_invalid("[site] brand must not be empty"));
    }
    Ok(())
}

/// Load the embedded settings.
///
/// Returns default settings if the embedded file can't be parsed.
pub fn load_settings() -> SiteSettings {
    load_settings_from(EMBEDDED_SETTINGS)
}

/// Load settings from the given TOML text, falling back to defaults
pub fn load_settings_from(content: &str) -> SiteSettings {
    match parse_settings(content).context("Failed to load site settings") {
        Ok(settings) => {
            debug!("Loaded site settings: {:?}", settings);
            settings
        }
        Err(_) => SiteSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::LogLevel;

    #[test]
    fn test_embedded_settings_parse() {
        let settings = parse_settings(EMBEDDED_SETTINGS).unwrap();
        assert_eq!(settings.site.brand, "ShaVolts");
        assert_eq!(settings.timers.clock_tick_ms, 1000);
        assert_eq!(settings.timers.carousel_autoplay_ms, 5000);
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, SiteSettings::default());
        assert_eq!(settings.site.search_placeholder, "Search shavolts.com");
        assert!(settings.motion.respect_reduced_motion);
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let settings = parse_settings("[timers]\ncarousel_autoplay_ms = 8000\n").unwrap();
        assert_eq!(settings.timers.carousel_autoplay_ms, 8000);
        assert_eq!(settings.timers.clock_tick_ms, 1000);
    }

    #[test]
    fn test_short_intervals_are_clamped() {
        let settings =
            parse_settings("[timers]\nclock_tick_ms = 5\ncarousel_autoplay_ms = 0\n").unwrap();
        assert_eq!(settings.timers.clock_tick_ms, MIN_TIMER_MS);
        assert_eq!(settings.timers.carousel_autoplay_ms, MIN_TIMER_MS);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = parse_settings("[timers\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_settings_reads_embedded_file() {
        let settings = load_settings();
        assert_eq!(settings, parse_settings(EMBEDDED_SETTINGS).unwrap());
        assert_eq!(settings.site.brand, "ShaVolts");
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_defaults() {
        let settings = load_settings_from("[logging]\nlevel = \"chatty\"\n");
        assert_eq!(settings, SiteSettings::default());
    }

    #[test]
    fn test_empty_brand_is_invalid() {
        let err = parse_settings("[site]\nbrand = \"  \"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert_eq!(load_settings_from("[site]\nbrand = \"\"\n"), SiteSettings::default());
    }

    #[test]
    fn test_reduced_motion_resolution() {
        let mut motion = crate::config::MotionSettings::default();
        assert!(motion.reduced(true));
        assert!(!motion.reduced(false));

        motion.respect_reduced_motion = false;
        assert!(!motion.reduced(true));

        motion.force_reduced_motion = true;
        assert!(motion.reduced(false));
    }
}
