//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Catalog / Selection Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Option index {index} out of range (have {len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    // ─────────────────────────────────────────────────────────────
    // Browser Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Browser API error: {message}")]
    Dom { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::warn!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("missing [timers] table");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing [timers] table"
        );

        let err = Error::OptionOutOfRange { index: 4, len: 4 };
        assert!(err.to_string().contains("index 4"));
        assert!(err.to_string().contains("have 4 options"));
    }

    #[test]
    fn test_dom_error_message() {
        let err = Error::dom("console logger: already set");
        assert_eq!(err.to_string(), "Browser API error: console logger: already set");
    }

    #[test]
    fn test_context_preserves_error() {
        let res: std::result::Result<(), Error> = Err(Error::dom("no window"));
        let err = res.context("reading viewport").unwrap_err();
        assert!(matches!(err, Error::Dom { .. }));
    }
}
