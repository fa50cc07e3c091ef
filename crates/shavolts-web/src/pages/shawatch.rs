use leptos::prelude::*;
use leptos_router::components::A;
use shavolts_app::message::ShaWatchMessage;
use shavolts_app::state::ShaWatchState;
use shavolts_core::content::shawatch::{
    BENEFITS, BENEFITS_TITLE, HERO_SUBTITLE, HERO_TITLE, OFFER, SECONDARY_LINKS, SHOP, TERMS_LINK,
    TERMS_NOTE, VIDEO, WATCHES,
};

use crate::components::disclosure::DisclosurePanel;
use crate::components::highlight::HighlightGrid;
use crate::components::icons::{self, GlyphIcon, Icon};
use crate::components::product_card::{CardTheme, ProductGrid};
use crate::components::video::BackgroundVideo;
use crate::hooks::{perform, send, use_reduced_motion};

#[component]
pub fn ShaWatch() -> impl IntoView {
    let reduced_motion = use_reduced_motion();
    let state = RwSignal::new(ShaWatchState::new());

    view! {
        <main class="bg-black text-white">
            <section class="pt-32 pb-24">
                <div class="container mx-auto px-4">
                    <div class="text-center mb-16">
                        <h1 class="text-6xl md:text-8xl font-light tracking-wide uppercase mb-4">{HERO_TITLE}</h1>
                        <p class="text-2xl text-[#86868B]">{HERO_SUBTITLE}</p>
                    </div>

                    <ProductGrid
                        items=WATCHES
                        theme=CardTheme::Dark
                        reduced_motion=reduced_motion
                        class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-6 mb-16"
                    />

                    <div class="hidden md:flex justify-center items-center gap-8 mb-12">
                        {SECONDARY_LINKS
                            .iter()
                            .map(|secondary| {
                                view! {
                                    <A href=secondary.link.href attr:class="flex items-center gap-2 text-white hover:text-[#0066FF] transition-colors">
                                        {secondary.glyph.map(|glyph| view! { <GlyphIcon glyph=glyph class="w-4 h-4" /> })}
                                        {secondary.link.label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="md:hidden space-y-2">
                        {SECONDARY_LINKS
                            .iter()
                            .map(|secondary| {
                                let label = secondary.link.label;
                                let href = secondary.link.href;
                                view! {
                                    <DisclosurePanel
                                        title=label
                                        glyph=secondary.glyph
                                        open=Signal::derive(move || state.with(|s| s.links.is_open(label)))
                                        on_toggle=move |_| perform(send(state, ShaWatchMessage::ToggleLink(label)), None)
                                    >
                                        <A href=href attr:class="text-[#0066FF] hover:underline">
                                            {format!("Go to {label}")}
                                        </A>
                                    </DisclosurePanel>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="text-center mt-12">
                        <p class="text-[#86868B] text-sm mb-4">{OFFER}</p>
                        <A href=SHOP.href attr:class="inline-flex items-center gap-2 text-[#0066FF] hover:text-[#00CCFF] transition-colors group">
                            {SHOP.label}
                            <Icon paths=icons::ARROW_RIGHT class="w-4 h-4 group-hover:translate-x-1 transition-transform" />
                        </A>
                    </div>
                </div>
            </section>

            <section class="py-24 bg-black">
                <div class="container mx-auto px-4">
                    <div class="max-w-5xl mx-auto overflow-hidden rounded-[2.5rem] shadow-2xl">
                        <BackgroundVideo src=VIDEO />
                    </div>
                </div>
            </section>

            <section class="py-24 bg-white">
                <div class="container mx-auto px-4">
                    <h2 class="text-[28px] text-center font-light text-[#1D1D1F] uppercase mb-16">{BENEFITS_TITLE}</h2>
                    <HighlightGrid items=BENEFITS class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8" />
                    <div class="text-center mt-12">
                        <A href=SHOP.href attr:class="inline-flex items-center gap-2 text-[#0066FF] hover:text-[#00CCFF] group">
                            {SHOP.label}
                            <Icon paths=icons::CHEVRON_RIGHT class="w-4 h-4 group-hover:translate-x-1 transition-transform duration-300" />
                        </A>
                    </div>
                    <p class="text-[#86868B] text-xs text-center mt-8">
                        {TERMS_NOTE}
                        " "
                        <A href=TERMS_LINK.href attr:class="text-[#0066FF] hover:underline">{TERMS_LINK.label}</A>
                    </p>
                </div>
            </section>
        </main>
    }
}
