//! ShaVolts - marketing and product-catalog site
//!
//! This is the WASM entry point. All logic lives in the workspace crates.

use leptos::prelude::*;
use shavolts_app::config::{load_settings, parse_settings, EMBEDDED_SETTINGS};
use shavolts_web::{logging, App};

fn main() {
    console_error_panic_hook::set_once();

    // The log level comes from settings, so read it before the logger exists;
    // the full load below reports any problem once it does.
    let level = parse_settings(EMBEDDED_SETTINGS)
        .map(|settings| settings.logging.level)
        .unwrap_or_default();
    if let Err(e) = logging::init(level) {
        leptos::logging::error!("{}", e);
    }

    let settings = load_settings();

    tracing::info!("mounting {}", settings.site.brand);
    mount_to_body(move || view! { <App settings=settings.clone() /> });
}
