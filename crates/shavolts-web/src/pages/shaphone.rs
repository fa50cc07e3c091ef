use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use shavolts_app::message::ShaPhoneMessage;
use shavolts_app::motion::{shaphone_device, ScrollRange};
use shavolts_app::state::ShaPhoneState;
use shavolts_core::content::shaphone::{
    COLORS, COMPARE_HREF, CTA_BUTTON, CTA_TITLE, CUSTOMIZE_TITLE, INTELLIGENCE,
    INTELLIGENCE_TITLE, LINEUP, LINEUP_TITLE, MOBILE_SPECS_LABEL, MOBILE_SPECS_PANEL,
    SHACARE_BLURB, SHACARE_TITLE, SPECS, STORAGE, STORAGE_TITLE, WHY_PANELS, WHY_TITLE,
};
use shavolts_core::{format_price, Glyph};

use crate::components::color_picker::ColorPicker;
use crate::components::disclosure::DisclosurePanel;
use crate::components::highlight::HighlightGrid;
use crate::components::icons::{self, GlyphIcon, Icon};
use crate::components::product_card::ProductGrid;
use crate::hooks::{perform, send, use_reduced_motion, use_scroll_progress};

#[component]
pub fn ShaPhone() -> impl IntoView {
    let reduced_motion = use_reduced_motion();
    let state = RwSignal::new(ShaPhoneState::new());
    let on_message = move |msg: ShaPhoneMessage| perform(send(state, msg), None);

    let container = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(container, ScrollRange::SHAPHONE);
    let device_style = move || shaphone_device(progress.get(), reduced_motion).to_css();

    let hero_image = move || state.with(|s| s.hero_image().unwrap_or_default());
    let selected_color = Signal::derive(move || state.with(|s| s.color.index()));
    let panel_open = move |id: &'static str| Signal::derive(move || state.with(|s| s.panels.is_open(id)));
    let bolt_class = if reduced_motion {
        "absolute top-2 right-2 w-4 h-4 text-[#0066FF]"
    } else {
        "absolute top-2 right-2 w-4 h-4 text-[#0066FF] animate-glow-pulse"
    };

    view! {
        <div node_ref=container class="bg-black text-white min-h-screen">
            <div class="relative min-h-screen">
                <div class="container mx-auto px-4 pt-32 pb-16 flex flex-col lg:flex-row gap-8">
                    <div class="flex-1">
                        <div class="relative" style:transform=device_style>
                            <img src=hero_image alt="ShaPhone" class="w-full rounded-3xl shadow-2xl" />
                            <div class="absolute inset-0 rounded-3xl bg-gradient-to-tr from-[#0066FF]/20 to-transparent"></div>
                        </div>
                        <div class="mt-12">
                            <ColorPicker
                                options=COLORS
                                selected=selected_color
                                on_select=move |index| on_message(ShaPhoneMessage::SelectColor(index))
                            />
                        </div>
                    </div>

                    <div class="lg:w-80 lg:sticky lg:top-32 lg:self-start pt-12">
                        <HighlightGrid items=SPECS dark=true class="space-y-6" />
                    </div>
                </div>
            </div>

            <section class="py-16 bg-gradient-to-b from-black to-[#1D1D1F]">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl md:text-6xl font-bold text-center mb-12">{CUSTOMIZE_TITLE}</h2>

                    <div class="max-w-2xl mx-auto mb-8">
                        <h3 class="text-xl mb-6">{STORAGE_TITLE}</h3>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            {STORAGE
                                .iter()
                                .enumerate()
                                .map(|(index, option)| {
                                    let selected = move || state.with(|s| s.storage.is_selected(index));
                                    view! {
                                        <button
                                            on:click=move |_| on_message(ShaPhoneMessage::SelectStorage(index))
                                            class=move || {
                                                if selected() {
                                                    "relative p-4 rounded-xl border-2 border-[#0066FF] bg-[#0066FF]/10 transition-colors"
                                                } else {
                                                    "relative p-4 rounded-xl border-2 border-gray-800 hover:border-[#0066FF]/50 transition-colors"
                                                }
                                            }
                                        >
                                            <span class="block font-semibold">{option.size}</span>
                                            <span class="block text-sm text-gray-400">{format_price(option.price)}</span>
                                            <Show when=selected>
                                                <Icon paths=icons::BOLT class=bolt_class />
                                            </Show>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="max-w-2xl mx-auto">
                        <button
                            on:click=move |_| on_message(ShaPhoneMessage::ToggleShaCare)
                            class=move || {
                                if state.with(|s| s.sha_care) {
                                    "w-full p-6 rounded-xl border-2 border-[#0066FF] bg-[#0066FF]/10 transition-colors text-left"
                                } else {
                                    "w-full p-6 rounded-xl border-2 border-gray-800 transition-colors text-left"
                                }
                            }
                            aria-pressed=move || state.with(|s| s.sha_care).to_string()
                        >
                            <span class="flex items-center gap-4">
                                <Icon paths=icons::SHIELD class="w-8 h-8 text-[#0066FF]" />
                                <span>
                                    <span class="block text-xl font-semibold">{SHACARE_TITLE}</span>
                                    <span class="block text-sm text-gray-400">{SHACARE_BLURB}</span>
                                </span>
                            </span>
                        </button>
                    </div>
                </div>
            </section>

            <section class="py-24 bg-[#FBFBFD]">
                <div class="container mx-auto px-4">
                    <h2 class="text-[32px] text-[#1D1D1F] text-center font-light uppercase mb-16">
                        {LINEUP_TITLE}
                    </h2>
                    <ProductGrid
                        items=LINEUP
                        cta="Buy"
                        reduced_motion=reduced_motion
                        link_slugs=true
                        class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-12"
                    />
                    <div class="text-center">
                        <A href=COMPARE_HREF attr:class="inline-flex items-center text-[#0066FF] hover:text-[#0066FF]/80 transition-colors group">
                            "Compare all models"
                            <Icon paths=icons::CHEVRON_RIGHT class="w-4 h-4 ml-1 group-hover:translate-x-1 transition-transform" />
                        </A>
                    </div>
                </div>
            </section>

            <section class="py-24 bg-black text-white overflow-hidden">
                <div class="container mx-auto px-4">
                    <h2 class="text-[32px] text-center font-light uppercase mb-16">{INTELLIGENCE_TITLE}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {INTELLIGENCE
                            .iter()
                            .map(|column| {
                                view! {
                                    <div class="bg-[#1D1D1F] rounded-2xl p-8 hover:shadow-[0_8px_24px_rgba(0,102,255,0.1)] transition-shadow">
                                        <h3 class="text-2xl font-semibold mb-6">{column.model}</h3>
                                        <div class="mb-8">
                                            <div class="flex items-center gap-3 mb-4">
                                                <GlyphIcon glyph=Glyph::Cpu class="w-6 h-6 text-[#0066FF]" />
                                                <h4 class="text-lg font-medium">{column.chip}</h4>
                                            </div>
                                            <p class="text-sm text-[#86868B]">
                                                {column.chip_detail}
                                                {column.chip_accent.map(|accent| view! { <span class="text-[#0066FF]">{accent}</span> })}
                                            </p>
                                        </div>
                                        <div class="mb-8">
                                            <div class="flex items-center gap-3 mb-4">
                                                <GlyphIcon glyph=Glyph::Camera class="w-6 h-6 text-[#0066FF]" />
                                                <h4 class="text-lg font-medium">{column.camera}</h4>
                                            </div>
                                            <ul class="space-y-3">
                                                {column
                                                    .camera_features
                                                    .iter()
                                                    .map(|feature| view! { <li class="text-sm text-[#86868B]">{*feature}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="md:hidden mt-8">
                        <DisclosurePanel
                            title=MOBILE_SPECS_LABEL
                            open=panel_open(MOBILE_SPECS_PANEL)
                            on_toggle=move |_| on_message(ShaPhoneMessage::TogglePanel(MOBILE_SPECS_PANEL))
                        >
                            <HighlightGrid items=SPECS dark=true class="space-y-4" />
                        </DisclosurePanel>
                    </div>
                </div>
            </section>

            <section class="py-16 bg-[#1D1D1F]">
                <div class="container mx-auto px-4 max-w-3xl space-y-4">
                    <h2 class="text-4xl md:text-6xl font-bold text-center mb-8">{WHY_TITLE}</h2>
                    {WHY_PANELS
                        .iter()
                        .map(|panel| {
                            let id = panel.id;
                            view! {
                                <DisclosurePanel
                                    title=panel.title
                                    glyph=Some(panel.glyph)
                                    open=panel_open(id)
                                    on_toggle=move |_| on_message(ShaPhoneMessage::TogglePanel(id))
                                >
                                    <p>{panel.body}</p>
                                </DisclosurePanel>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="py-16 bg-gradient-to-t from-[#0066FF]/20 to-[#1D1D1F]">
                <div class="container mx-auto px-4 text-center max-w-4xl">
                    <h2 class="text-5xl md:text-7xl font-bold mb-6">{CTA_TITLE}</h2>
                    <p class="text-xl text-gray-400 mb-8">{move || state.with(|s| s.cta_text())}</p>
                    <button class="bg-[#0066FF] hover:bg-[#00CCFF] text-white px-12 py-6 rounded-full text-xl font-medium inline-flex items-center gap-2 group">
                        {CTA_BUTTON}
                        <Icon paths=icons::CHEVRON_RIGHT class="w-6 h-6 group-hover:translate-x-1 transition-transform" />
                    </button>
                </div>
            </section>
        </div>
    }
}
