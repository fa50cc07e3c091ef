use leptos::html;
use leptos::prelude::*;
use shavolts_app::message::ShaBookMessage;
use shavolts_app::motion::{scale_css, shabook_device, shabook_video_scale, ScrollRange};
use shavolts_app::state::ShaBookState;
use shavolts_core::content::shabook::{
    COLORS, CTA_PRICE, CTA_TITLE, HERO_SUBTITLE, HERO_TITLE, LINEUP, LINEUP_TITLE, PERFORMANCE,
    PERFORMANCE_SUBTITLE, PERFORMANCE_TITLE, PLANET_BODY, PLANET_CTA, PLANET_TITLE, SPECS, VIDEO,
    VIDEO_BODY, VIDEO_TITLE,
};

use crate::components::color_picker::ColorPicker;
use crate::components::highlight::HighlightGrid;
use crate::components::icons::{self, GlyphIcon, Icon};
use crate::components::product_card::{CardTheme, ProductGrid};
use crate::components::video::BackgroundVideo;
use crate::hooks::{perform, send, use_reduced_motion, use_scroll_progress};

#[component]
pub fn ShaBook() -> impl IntoView {
    let reduced_motion = use_reduced_motion();
    let state = RwSignal::new(ShaBookState::new());

    let hero = NodeRef::<html::Div>::new();
    let device = NodeRef::<html::Div>::new();
    let video = NodeRef::<html::Div>::new();
    let hero_progress = use_scroll_progress(hero, ScrollRange::SHABOOK_HERO);
    let scrub_progress = use_scroll_progress(device, ScrollRange::SHABOOK_DEVICE);
    let video_progress = use_scroll_progress(video, ScrollRange::SHABOOK_VIDEO);

    let device_style = move || {
        shabook_device(hero_progress.get(), scrub_progress.get(), reduced_motion).to_css()
    };
    let video_style = move || scale_css(shabook_video_scale(video_progress.get(), reduced_motion));

    let hero_image = move || state.with(|s| s.hero_image().unwrap_or_default());
    let selected_color = Signal::derive(move || state.with(|s| s.color.index()));

    view! {
        <main class="bg-black text-white">
            <div node_ref=hero class="min-h-screen relative overflow-hidden">
                <div class="container mx-auto px-4 pt-32">
                    <div class="text-center mb-12">
                        <h1 class="text-6xl md:text-8xl font-semibold tracking-tight mb-4">{HERO_TITLE}</h1>
                        <p class="text-2xl md:text-3xl text-gray-400">{HERO_SUBTITLE}</p>
                    </div>

                    <div class="relative flex justify-center items-center">
                        <div node_ref=device class="w-full max-w-4xl">
                            <div class="relative" style:transform=device_style>
                                <img src=hero_image alt="ShaBook Pro" class="w-full rounded-2xl shadow-2xl" />
                                <div class="absolute inset-0 bg-gradient-to-tr from-[#0066FF]/20 to-transparent rounded-2xl"></div>
                            </div>
                        </div>
                    </div>

                    <div class="mt-12">
                        <ColorPicker
                            options=COLORS
                            selected=selected_color
                            on_select=move |index| perform(send(state, ShaBookMessage::SelectColor(index)), None)
                        />
                    </div>
                </div>

                <div class="absolute top-1/2 right-8 -translate-y-1/2 hidden lg:block w-72">
                    <HighlightGrid items=SPECS dark=true class="space-y-6" />
                </div>
            </div>

            <section class="relative w-full h-screen overflow-hidden">
                <div node_ref=video class="absolute inset-0">
                    <div class="relative w-full h-full" style:transform=video_style>
                        <BackgroundVideo src=VIDEO />
                        <div class="absolute inset-0 bg-gradient-to-t from-black via-transparent to-transparent"></div>
                    </div>
                </div>
                <div class="absolute bottom-0 left-0 right-0 p-8">
                    <div class="container mx-auto max-w-2xl">
                        <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">{VIDEO_TITLE}</h2>
                        <p class="text-lg text-white/90">{VIDEO_BODY}</p>
                    </div>
                </div>
            </section>

            <section class="py-24 bg-black">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl md:text-5xl font-semibold text-center mb-16">{LINEUP_TITLE}</h2>
                    <ProductGrid items=LINEUP cta="Learn more" theme=CardTheme::Dark reduced_motion=reduced_motion />
                    <div class="text-center mt-12">
                        <button class="text-[#0066FF] hover:text-[#00CCFF] inline-flex items-center gap-2 group">
                            "Compare all models"
                            <Icon paths=icons::CHEVRON_RIGHT class="w-4 h-4 group-hover:translate-x-1 transition-transform" />
                        </button>
                    </div>
                </div>
            </section>

            <section class="py-24 bg-black">
                <div class="container mx-auto px-4">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-semibold mb-4">{PERFORMANCE_TITLE}</h2>
                        <p class="text-xl text-gray-400">{PERFORMANCE_SUBTITLE}</p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                        {PERFORMANCE
                            .iter()
                            .map(|block| {
                                view! {
                                    <div class="bg-[#1D1D1F] rounded-2xl p-8">
                                        <GlyphIcon glyph=block.glyph class="w-12 h-12 text-[#0066FF] mb-6" />
                                        <h3 class="text-2xl font-semibold mb-4">{block.title}</h3>
                                        <ul class="space-y-4">
                                            {block
                                                .points
                                                .iter()
                                                .map(|point| {
                                                    view! {
                                                        <li class="flex items-center gap-3">
                                                            <Icon paths=icons::BOLT class="w-5 h-5 text-[#0066FF]" />
                                                            <span>{*point}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-24 bg-[#1D1D1F]">
                <div class="container mx-auto px-4 max-w-3xl text-center">
                    <Icon paths=icons::RECYCLE class="w-16 h-16 text-[#0066FF] mx-auto mb-6" />
                    <h2 class="text-4xl md:text-5xl font-semibold mb-4">{PLANET_TITLE}</h2>
                    <p class="text-xl text-gray-400 mb-8">{PLANET_BODY}</p>
                    <button class="bg-[#0066FF] hover:bg-[#00CCFF] text-white px-8 py-4 rounded-full font-medium inline-flex items-center gap-2">
                        <span>{PLANET_CTA}</span>
                        <Icon paths=icons::ARROW_RIGHT class="w-5 h-5" />
                    </button>
                </div>
            </section>

            <section class="py-24 bg-gradient-to-b from-black to-[#0066FF]/20">
                <div class="container mx-auto px-4 text-center max-w-4xl">
                    <h2 class="text-5xl md:text-7xl font-bold mb-6">{CTA_TITLE}</h2>
                    <p class="text-xl text-gray-400 mb-8">{CTA_PRICE}</p>
                    <button class="bg-[#0066FF] hover:bg-[#00CCFF] text-white px-12 py-6 rounded-full text-xl font-medium inline-flex items-center gap-2 group">
                        "Buy Now"
                        <Icon paths=icons::CHEVRON_RIGHT class="w-6 h-6 group-hover:translate-x-1 transition-transform" />
                    </button>
                </div>
            </section>
        </main>
    }
}
