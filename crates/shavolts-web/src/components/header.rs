use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use shavolts_app::message::HeaderMessage;
use shavolts_app::state::HeaderState;
use shavolts_core::{BAG_HREF, MAIN_NAV};

use super::icons::{self, Icon};
use super::menu::MobileMenu;
use super::search_overlay::SearchOverlay;
use crate::hooks::{perform, send, use_reduced_motion, use_settings};

#[component]
pub fn Header() -> impl IntoView {
    let settings = use_settings();
    let reduced_motion = use_reduced_motion();
    let location = use_location();

    let state = RwSignal::new(HeaderState::new());
    let search_input = NodeRef::<html::Input>::new();
    let on_message = move |msg: HeaderMessage| perform(send(state, msg), Some(search_input));

    let search_open = move || state.with(|s| s.search_open);
    let menu_open = move || state.with(|s| s.menu_open);

    let logo_class = if reduced_motion {
        "w-5 h-5 text-[#0066FF]"
    } else {
        "w-5 h-5 text-[#0066FF] animate-glow-pulse"
    };
    let brand = settings.site.brand;
    let placeholder = settings.site.search_placeholder;

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 h-11 bg-black/80 backdrop-blur-md">
            <div class="max-w-5xl mx-auto px-4 h-full flex items-center justify-between text-white">
                <button
                    on:click=move |_| on_message(HeaderMessage::OpenMenu)
                    class="md:hidden text-[#F5F5F7] hover:text-white"
                    aria-label="Open menu"
                >
                    <Icon paths=icons::MENU class="w-5 h-5" />
                </button>

                <A href="/" attr:class="flex items-center space-x-1 group">
                    <Icon paths=icons::BOLT class=logo_class />
                    <span class="text-sm font-semibold tracking-tight">{brand}</span>
                </A>

                <nav class="hidden md:flex items-center space-x-8">
                    {MAIN_NAV
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <A
                                    href=href
                                    attr:class=move || {
                                        if location.pathname.get() == href {
                                            "text-xs text-white transition-colors"
                                        } else {
                                            "text-xs text-[#F5F5F7]/80 hover:text-white transition-colors"
                                        }
                                    }
                                >
                                    {link.label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center space-x-6">
                    <button
                        on:click=move |_| on_message(HeaderMessage::OpenSearch)
                        class="text-[#F5F5F7]/80 hover:text-white"
                        aria-label="Search"
                    >
                        <Icon paths=icons::SEARCH class="w-4 h-4" />
                    </button>
                    <a href=BAG_HREF class="text-[#F5F5F7]/80 hover:text-white" aria-label="Bag">
                        <Icon paths=icons::SHOPPING_BAG class="w-4 h-4" />
                    </a>
                </div>
            </div>
        </header>

        <Show when=search_open>
            <SearchOverlay
                placeholder=placeholder.clone()
                input_ref=search_input
                on_cancel=move |_| on_message(HeaderMessage::CloseSearch)
            />
        </Show>

        <Show when=menu_open>
            <MobileMenu
                links=MAIN_NAV
                on_select=move |href| on_message(HeaderMessage::SelectMenuLink(href))
                on_close=move |_| on_message(HeaderMessage::CloseMenu)
            />
        </Show>
    }
}
