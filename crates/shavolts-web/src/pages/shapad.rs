use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use shavolts_app::message::{HeaderMessage, ShaPadMessage};
use shavolts_app::state::ShaPadState;
use shavolts_core::content::shapad::{
    anchor_id, COMPARE_HREF, GRID_TITLE, HERO_TITLE, HERO_VIDEO, PRODUCTS, SUB_NAV,
};
use shavolts_core::BAG_HREF;

use crate::components::icons::{self, Icon};
use crate::components::menu::MobileMenu;
use crate::components::product_card::ProductCard;
use crate::components::search_overlay::SearchOverlay;
use crate::components::video::BackgroundVideo;
use crate::hooks::{perform, send, use_reduced_motion, use_settings};

#[component]
pub fn ShaPad() -> impl IntoView {
    let reduced_motion = use_reduced_motion();
    let placeholder = use_settings().site.search_placeholder;

    let state = RwSignal::new(ShaPadState::new());
    let search_input = NodeRef::<html::Input>::new();
    let on_message = move |msg: ShaPadMessage| perform(send(state, msg), Some(search_input));
    let nav = move |msg: HeaderMessage| on_message(ShaPadMessage::Nav(msg));

    view! {
        <main class="bg-white text-[#1D1D1F]">
            <div class="sticky top-11 z-40">
                <nav class="h-12 bg-white/80 backdrop-blur-md border-b border-[#D2D2D7]">
                    <div class="container mx-auto px-4 h-full flex items-center justify-between">
                        <button on:click=move |_| nav(HeaderMessage::OpenMenu) class="md:hidden" aria-label="Open menu">
                            <Icon paths=icons::MENU class="w-6 h-6" />
                        </button>

                        <div class="hidden md:flex items-center space-x-8">
                            {SUB_NAV
                                .iter()
                                .map(|link| {
                                    let id = anchor_id(link);
                                    view! {
                                        <a
                                            href=link.href
                                            on:click=move |e: ev::MouseEvent| {
                                                e.prevent_default();
                                                on_message(ShaPadMessage::SelectSection(id));
                                            }
                                            class=move || {
                                                if state.with(|s| s.is_active(id)) {
                                                    "text-sm text-[#1D1D1F] transition-colors duration-300"
                                                } else {
                                                    "text-sm text-[#86868B] hover:text-[#1D1D1F] transition-colors duration-300"
                                                }
                                            }
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex items-center space-x-4">
                            <button
                                on:click=move |_| nav(HeaderMessage::OpenSearch)
                                class="hover:scale-110 transition-transform duration-300"
                                aria-label="Search"
                            >
                                <Icon paths=icons::SEARCH class="w-5 h-5" />
                            </button>
                            <A href=BAG_HREF attr:class="hover:scale-110 transition-transform duration-300">
                                <Icon paths=icons::SHOPPING_BAG class="w-5 h-5" />
                            </A>
                        </div>
                    </div>
                </nav>
            </div>

            <section id="overview" class="min-h-screen pt-20 relative overflow-hidden">
                <div class="container mx-auto px-4">
                    <h1 class="text-6xl md:text-[96px] font-light tracking-tight text-center mb-8">{HERO_TITLE}</h1>
                    <div class="relative flex justify-center items-center">
                        <div class="relative w-full max-w-4xl">
                            <BackgroundVideo src=HERO_VIDEO class="w-full rounded-2xl shadow-2xl" />
                            <div class="absolute inset-0 bg-gradient-to-tr from-[#0066FF]/20 to-transparent rounded-2xl"></div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="compare" class="py-24 bg-[#F5F5F7]">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-semibold text-center mb-16">{GRID_TITLE}</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-8">
                        {PRODUCTS
                            .iter()
                            .map(|item| view! { <ProductCard item=*item reduced_motion=reduced_motion /> })
                            .collect_view()}
                        <div class="bg-white rounded-2xl p-6 flex flex-col justify-center items-center">
                            <A href=COMPARE_HREF attr:class="text-[#0066FF] hover:text-[#00CCFF] flex items-center gap-2 group">
                                <span class="text-lg font-semibold">"Compare"</span>
                                <Icon paths=icons::CHEVRON_RIGHT class="w-5 h-5 group-hover:translate-x-1 transition-transform" />
                            </A>
                        </div>
                    </div>
                </div>
            </section>

            <Show when=move || state.with(|s| s.nav.search_open)>
                <SearchOverlay
                    placeholder=placeholder.clone()
                    input_ref=search_input
                    on_cancel=move |_| nav(HeaderMessage::CloseSearch)
                    light=true
                />
            </Show>

            <Show when=move || state.with(|s| s.nav.menu_open)>
                <MobileMenu
                    links=SUB_NAV
                    on_select=move |href| nav(HeaderMessage::SelectMenuLink(href))
                    on_close=move |_| nav(HeaderMessage::CloseMenu)
                    in_page=true
                    light=true
                />
            </Show>
        </main>
    }
}
