use leptos::prelude::*;
use shavolts_app::message::ClockMessage;
use shavolts_app::state::Clock;
use shavolts_core::content::home::{
    HomeSection, HERO_CTA, HERO_HEADING, HERO_IMAGE, HERO_SUBHEADING, NEW_ARRIVALS,
    NEW_ARRIVALS_TITLE, SECTIONS, WATCH_PROMO,
};

use crate::components::icons::{self, Icon};
use crate::components::product_card::ProductGrid;
use crate::hooks::{send, use_interval, use_reduced_motion, use_settings};

#[component]
pub fn Home() -> impl IntoView {
    let reduced_motion = use_reduced_motion();

    view! {
        <div>
            {SECTIONS
                .iter()
                .map(|section| match section {
                    HomeSection::Hero => view! { <Hero /> }.into_any(),
                    HomeSection::NewArrivals => {
                        view! { <NewArrivals reduced_motion=reduced_motion /> }.into_any()
                    }
                    HomeSection::WatchPromo => {
                        view! { <WatchPromo reduced_motion=reduced_motion /> }.into_any()
                    }
                })
                .collect_view()}
        </div>
    }
}

fn background(image: &str) -> String {
    format!(
        "background-image: url('{image}'); background-size: cover; background-position: center; background-blend-mode: overlay"
    )
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center">
            <div
                class="absolute inset-0 bg-gradient-to-r from-[#0066FF]/10 to-[#00CCFF]/10"
                style=background(HERO_IMAGE)
            ></div>
            <div class="container mx-auto px-4 pt-32 relative z-10">
                <div class="max-w-3xl">
                    <h1 class="text-5xl md:text-7xl font-bold text-white mb-6">{HERO_HEADING}</h1>
                    <p class="text-xl text-white/90 mb-8">{HERO_SUBHEADING}</p>
                    <button class="bg-[#0066FF] hover:bg-[#00CCFF] text-white px-8 py-4 rounded-full font-medium flex items-center space-x-2 transition-colors">
                        <span>{HERO_CTA}</span>
                        <Icon paths=icons::ARROW_RIGHT class="w-5 h-5" />
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn NewArrivals(reduced_motion: bool) -> impl IntoView {
    view! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold text-center mb-12">{NEW_ARRIVALS_TITLE}</h2>
                <ProductGrid items=NEW_ARRIVALS reduced_motion=reduced_motion />
            </div>
        </section>
    }
}

/// ShaWatch teaser with a live 24-hour clock
#[component]
fn WatchPromo(reduced_motion: bool) -> impl IntoView {
    let tick_ms = use_settings().timers.clock_tick_ms;
    let clock = RwSignal::new(Clock::now());
    use_interval(tick_ms, move || {
        send(clock, ClockMessage::Tick(chrono::Local::now().time()));
    });

    let bolt_class = if reduced_motion {
        "w-8 h-8 text-[#0066FF]"
    } else {
        "w-8 h-8 text-[#0066FF] animate-glow-pulse"
    };

    view! {
        <section class="relative min-h-screen bg-black overflow-hidden">
            <div class="absolute inset-0 bg-black/90" style=background(WATCH_PROMO.image)></div>

            <div class="relative z-10 max-w-5xl mx-auto px-4 min-h-screen flex flex-col items-center justify-center text-center">
                <div class="absolute top-8 w-full flex justify-between items-center px-4">
                    <Icon paths=icons::BOLT class=bolt_class />
                    <div class="font-mono text-xl text-white/80">
                        {move || clock.with(|c| c.display())}
                    </div>
                </div>

                <div class="space-y-6">
                    <h2 class="text-6xl md:text-8xl font-light tracking-wide text-white uppercase">
                        {WATCH_PROMO.title}
                    </h2>
                    <p class="text-2xl md:text-3xl text-[#86868B] font-light">{WATCH_PROMO.model}</p>
                    <p class="text-xl md:text-2xl text-white/90 font-light mt-4">
                        {WATCH_PROMO.tagline}
                    </p>
                    <div class="flex flex-col md:flex-row items-center justify-center gap-4 mt-8">
                        <button class="bg-[#0066FF] text-white px-8 py-3 rounded-full font-medium min-w-[140px]">
                            {WATCH_PROMO.buy_label}
                        </button>
                        <button class="border border-[#0066FF] text-[#0066FF] px-8 py-3 rounded-full font-medium min-w-[140px] hover:bg-[#0066FF] hover:text-white transition-colors duration-300">
                            {WATCH_PROMO.learn_more_label}
                        </button>
                    </div>
                </div>

                {(!reduced_motion)
                    .then(|| {
                        view! {
                            <div class="absolute inset-0 pointer-events-none">
                                <div class="absolute inset-0 bg-gradient-to-r from-[#0066FF]/0 via-[#0066FF]/5 to-[#0066FF]/0 animate-pulse"></div>
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}
