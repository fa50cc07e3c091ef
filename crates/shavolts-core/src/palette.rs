//! Brand colors shared by badges and inline styles

pub const PRIMARY: &str = "#0066FF";
pub const SECONDARY_TEXT: &str = "#86868B";
pub const INK: &str = "#1D1D1F";
