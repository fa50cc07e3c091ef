//! shavolts-web - Leptos front end for the ShaVolts site
//!
//! The router shell (header, routed page, footer), the page components and
//! the browser hooks that drive the `shavolts-app` state machines.

pub mod components;
pub mod hooks;
pub mod logging;
pub mod pages;

use components::footer::Footer;
use components::header::Header;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use pages::accessories::Accessories;
use pages::home::Home;
use pages::shabook::ShaBook;
use pages::shapad::ShaPad;
use pages::shaphone::ShaPhone;
use pages::shawatch::ShaWatch;
use pages::store::Store;
use pages::support::Support;
use shavolts_app::shell::{document_title, resolve};
use shavolts_app::SiteSettings;
use shavolts_core::Route;

#[component]
pub fn App(settings: SiteSettings) -> impl IntoView {
    provide_meta_context();
    provide_context(settings);

    view! {
        <Router>
            <ScrollToTop />
            <DocumentTitle />
            <div class="min-h-screen flex flex-col bg-black font-sans">
                <Header />
                <div class="pt-11 flex-1">
                    <Page />
                </div>
                <Footer />
            </div>
        </Router>
    }
}

/// The routed page body; unknown paths keep the shell with an empty body
#[component]
fn Page() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| resolve(&location.pathname.get()));

    move || route.get().map(page_view)
}

fn page_view(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <Home /> }.into_any(),
        Route::Store => view! { <Store /> }.into_any(),
        Route::ShaPhone => view! { <ShaPhone /> }.into_any(),
        Route::ShaBook => view! { <ShaBook /> }.into_any(),
        Route::ShaPad => view! { <ShaPad /> }.into_any(),
        Route::ShaWatch => view! { <ShaWatch /> }.into_any(),
        Route::Accessories => view! { <Accessories /> }.into_any(),
        Route::Support => view! { <Support /> }.into_any(),
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}

#[component]
fn DocumentTitle() -> impl IntoView {
    let location = use_location();
    let title = move || document_title(&location.pathname.get());

    view! { <Title text=title /> }
}
