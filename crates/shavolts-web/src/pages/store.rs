use leptos::prelude::*;
use leptos_router::components::A;
use shavolts_app::message::CarouselMessage;
use shavolts_app::state::Carousel;
use shavolts_core::content::store::{FEATURED, PROMOS, SLIDES, WHY_SHAVOLTS, WHY_TITLE};

use crate::components::highlight::HighlightGrid;
use crate::components::icons::{self, Icon};
use crate::components::product_card::{CardTheme, ProductGrid};
use crate::hooks::{perform, send, use_interval, use_reduced_motion, use_settings};

#[component]
pub fn Store() -> impl IntoView {
    let reduced_motion = use_reduced_motion();

    view! {
        <main class="bg-black text-white">
            <HeroCarousel />

            <section class="py-20 bg-[#1D1D1F]">
                <div class="container mx-auto px-4">
                    <ProductGrid
                        items=FEATURED
                        theme=CardTheme::Dark
                        reduced_motion=reduced_motion
                        link_slugs=true
                        class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8"
                    />
                </div>
            </section>

            <section class="py-20 bg-black">
                <div class="container mx-auto px-4 grid md:grid-cols-2 gap-8">
                    {PROMOS
                        .iter()
                        .map(|promo| {
                            view! {
                                <div class="bg-[#1D1D1F] rounded-2xl p-8 hover:scale-[1.02] transition-transform">
                                    <h3 class="text-2xl font-semibold mb-4">{promo.title}</h3>
                                    <p class="text-gray-400 mb-6">{promo.body}</p>
                                    <A href=promo.link.href attr:class="text-[#0066FF] hover:text-[#00CCFF] flex items-center gap-2">
                                        {promo.link.label}
                                        <Icon paths=icons::ARROW_RIGHT class="w-5 h-5" />
                                    </A>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="py-20 bg-[#1D1D1F]">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-semibold text-center mb-12">{WHY_TITLE}</h2>
                    <HighlightGrid items=WHY_SHAVOLTS dark=true class="grid md:grid-cols-3 gap-8 text-center" />
                </div>
            </section>
        </main>
    }
}

/// Looping full-screen slides, advanced by the autoplay timer or the controls
#[component]
fn HeroCarousel() -> impl IntoView {
    let autoplay_ms = use_settings().timers.carousel_autoplay_ms;
    let carousel = RwSignal::new(Carousel::new(SLIDES));
    let on_message = move |msg: CarouselMessage| perform(send(carousel, msg), None);
    use_interval(autoplay_ms, move || on_message(CarouselMessage::Tick));

    let track_style = move || {
        format!(
            "transform: translateX(-{}%)",
            carousel.with(|c| c.index()) * 100
        )
    };

    view! {
        <div class="relative overflow-hidden">
            <div class="flex transition-transform duration-700 ease-out" style=track_style>
                {SLIDES
                    .iter()
                    .map(|slide| {
                        let style = format!(
                            "background-image: linear-gradient(to right, rgba(0,0,0,0.7), rgba(0,0,0,0.3)), url({}); background-size: cover; background-position: center",
                            slide.image
                        );
                        view! {
                            <div class="relative min-w-full">
                                <div class="h-screen relative flex items-center" style=style>
                                    <div class="container mx-auto px-4">
                                        <div class="max-w-3xl">
                                            <h1 class="text-6xl md:text-8xl font-bold mb-4">{slide.title}</h1>
                                            <p class="text-2xl md:text-3xl mb-8">{slide.subtitle}</p>
                                            <div class="flex gap-6">
                                                <button class="bg-[#0066FF] hover:bg-[#00CCFF] px-8 py-4 rounded-full font-medium">
                                                    "Buy"
                                                </button>
                                                <button class="text-[#0066FF] hover:text-[#00CCFF] flex items-center gap-2 group">
                                                    "Learn more"
                                                    <Icon paths=icons::ARROW_RIGHT class="w-5 h-5 group-hover:translate-x-1 transition-transform" />
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                on:click=move |_| on_message(CarouselMessage::Previous)
                class="absolute left-4 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/40 hover:bg-black/60"
                aria-label="Previous slide"
            >
                <Icon paths=icons::CHEVRON_LEFT class="w-6 h-6" />
            </button>
            <button
                on:click=move |_| on_message(CarouselMessage::Next)
                class="absolute right-4 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/40 hover:bg-black/60"
                aria-label="Next slide"
            >
                <Icon paths=icons::CHEVRON_RIGHT class="w-6 h-6" />
            </button>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 flex gap-2">
                {(0..SLIDES.len())
                    .map(|index| {
                        view! {
                            <button
                                on:click=move |_| on_message(CarouselMessage::GoTo(index))
                                class=move || {
                                    if carousel.with(|c| c.index() == index) {
                                        "w-8 h-2 rounded-full bg-white transition-all"
                                    } else {
                                        "w-2 h-2 rounded-full bg-white/50 transition-all"
                                    }
                                }
                                aria-label=format!("Go to slide {}", index + 1)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
