//! Browser logging
//!
//! `tracing` events from every crate are forwarded to the `log` facade
//! (tracing's `log` feature), which `console_log` writes to the devtools console.

use shavolts_app::config::LogLevel;
use shavolts_core::prelude::*;

fn to_log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Trace => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}

/// Install the console logger. Fails if a logger is already installed.
pub fn init(level: LogLevel) -> Result<()> {
    console_log::init_with_level(to_log_level(level))
        .map_err(|e| Error::dom(format!("console logger: {e}")))?;
    info!("ShaVolts logging at {}", level);
    Ok(())
}
