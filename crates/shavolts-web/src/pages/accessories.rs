use leptos::prelude::*;
use leptos_router::components::A;
use shavolts_app::message::AccessoriesMessage;
use shavolts_app::state::{AccessoriesState, BrowseTab};
use shavolts_core::content::accessories::{
    CATEGORIES, HERO_TITLE, PAD_ACCESSORIES, PAD_SHOP_ALL, PAD_TITLE, PHONE_ACCESSORIES,
    PHONE_SHOP_ALL, PHONE_TITLE, SEARCH_PLACEHOLDER,
};
use shavolts_core::NavLink;

use crate::components::icons::{self, GlyphIcon, Icon};
use crate::components::product_card::ProductGrid;
use crate::hooks::{perform, send, use_reduced_motion};

#[component]
pub fn Accessories() -> impl IntoView {
    let reduced_motion = use_reduced_motion();
    let state = RwSignal::new(AccessoriesState::new());
    let on_message = move |msg: AccessoriesMessage| perform(send(state, msg), None);

    view! {
        <main class="bg-white text-[#1D1D1F]">
            <section class="pt-32 pb-16">
                <div class="container mx-auto px-4">
                    <h1 class="text-4xl md:text-5xl font-semibold text-center mb-8">{HERO_TITLE}</h1>

                    <div class="relative max-w-2xl mx-auto mb-12">
                        <Icon paths=icons::SEARCH class="absolute left-4 top-1/2 -translate-y-1/2 w-5 h-5 text-[#86868B]" />
                        <input
                            type="text"
                            placeholder=SEARCH_PLACEHOLDER
                            prop:value=move || state.with(|s| s.query.clone())
                            on:input=move |ev| on_message(AccessoriesMessage::SetQuery(event_target_value(&ev)))
                            class="w-full h-12 pl-12 pr-4 rounded-xl border border-[#D2D2D7] text-lg placeholder-[#86868B] focus:outline-none focus:border-[#0066FF]"
                        />
                    </div>

                    <div class="flex justify-center mb-12">
                        <div class="border-b border-[#D2D2D7]">
                            {BrowseTab::ALL
                                .into_iter()
                                .map(|tab| {
                                    view! {
                                        <button
                                            on:click=move |_| on_message(AccessoriesMessage::SelectTab(tab))
                                            class=move || {
                                                if state.with(|s| s.tab == tab) {
                                                    "px-6 py-2 font-medium text-[#1D1D1F] border-b-2 border-[#1D1D1F]"
                                                } else {
                                                    "px-6 py-2 font-medium text-[#86868B] border-b-2 border-transparent"
                                                }
                                            }
                                        >
                                            {tab.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="grid grid-cols-3 md:grid-cols-5 gap-8">
                        {CATEGORIES
                            .iter()
                            .map(|category| {
                                view! {
                                    <a href=category.anchor() class="flex flex-col items-center group hover:-translate-y-1 transition-transform">
                                        <div class="w-24 h-24 rounded-full bg-[#F5F5F7] flex items-center justify-center mb-4 group-hover:bg-[#E5E5E5] transition-colors">
                                            <GlyphIcon glyph=category.glyph class="w-12 h-12" />
                                        </div>
                                        <span class="text-center">{category.name}</span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-24 bg-[#F5F5F7]">
                <div class="container mx-auto px-4">
                    <div class="text-center mb-12">
                        <h2 class="text-[40px] font-medium leading-tight mb-4">{PHONE_TITLE}</h2>
                        <ShopAllLink link=PHONE_SHOP_ALL />
                    </div>
                    <ProductGrid items=PHONE_ACCESSORIES reduced_motion=reduced_motion />
                </div>
            </section>

            <section class="py-24 bg-white">
                <div class="container mx-auto px-4">
                    <div class="text-center mb-12">
                        <h2 class="text-[40px] font-medium leading-tight mb-4">{PAD_TITLE}</h2>
                        <ShopAllLink link=PAD_SHOP_ALL />
                    </div>
                    <ProductGrid items=PAD_ACCESSORIES reduced_motion=reduced_motion />
                </div>
            </section>
        </main>
    }
}

#[component]
fn ShopAllLink(link: NavLink) -> impl IntoView {
    view! {
        <A href=link.href attr:class="text-[#0066CC] hover:text-[#0066CC]/80 transition-colors inline-flex items-center gap-1 group">
            {link.label}
            <Icon paths=icons::CHEVRON_RIGHT class="w-4 h-4 group-hover:translate-x-1 transition-transform" />
        </A>
    }
}
