//! Site settings
//!
//! - `types`: serde structs mirroring `site.toml`
//! - `settings`: parsing, validation and the embedded default file

pub mod settings;
pub mod types;

pub use settings::{load_settings, load_settings_from, parse_settings, EMBEDDED_SETTINGS};
pub use types::*;
