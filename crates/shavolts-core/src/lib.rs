//! # shavolts-core - Domain Types and Site Content
//!
//! Foundation crate for the ShaVolts site. Holds the registered routes, the
//! catalog record types, navigation data, every page's literal content, and
//! the error type shared by the other crates.
//!
//! Nothing here touches the browser, so the whole crate builds and tests
//! natively.
//!
//! ## Public API
//!
//! ### Routes (`route`)
//! - [`Route`] - The eight registered pages, with `path()`, `title()` and `from_path()`
//!
//! ### Catalog (`catalog`)
//! - [`CatalogItem`] - Product/accessory display record with optional tagline, badge, colors, features
//! - [`ColorOption`], [`StorageOption`] - Selectable options on product pages
//! - [`Badge`], [`BadgeKind`] - Decorative card badges
//!
//! ### Navigation (`nav`)
//! - [`NavLink`] - Label + target path (targets need not be registered routes)
//! - [`MAIN_NAV`], [`FOOTER_SECTIONS`], [`LEGAL_LINKS`]
//! - [`FooterSectionKey`] - Identifier of a footer column
//!
//! ### Content (`content`)
//! - One module per page (`home`, `store`, `shaphone`, ...)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum for settings, selection and browser failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use shavolts_core::prelude::*;
//! ```

pub mod catalog;
pub mod content;
pub mod error;
pub mod glyph;
pub mod nav;
pub mod palette;
pub mod route;

/// Prelude for common imports used throughout the ShaVolts crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use catalog::{
    format_price, Badge, BadgeKind, CatalogItem, ColorOption, StorageOption,
};
pub use content::{Highlight, Panel};
pub use error::{Error, Result, ResultExt};
pub use glyph::Glyph;
pub use nav::{
    footer_section, FooterSection, FooterSectionKey, NavLink, BAG_HREF, FOOTER_SECTIONS,
    LEGAL_LINKS, MAIN_NAV,
};
pub use route::Route;
