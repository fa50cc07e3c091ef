//! shavolts-app - UI state and motion for the ShaVolts site
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! site's page-local state: each component owns a state struct, receives
//! messages from the view, and may hand back an [`UpdateAction`] for the
//! browser layer (navigate, focus, scroll). It also holds the pure motion
//! math behind the scroll effects and the embedded site settings.
//!
//! Nothing here depends on the DOM, so every state machine is tested natively.

pub mod config;
pub mod handler;
pub mod message;
pub mod motion;
pub mod shell;
pub mod state;

pub use config::{load_settings, SiteSettings};
pub use handler::{dispatch, Component, UpdateAction, UpdateResult};
pub use shell::{document_title, resolve};
