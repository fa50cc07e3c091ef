use leptos::prelude::*;
use shavolts_core::content::support::{HERO_SUBTITLE, HERO_TITLE, TOPICS};

use crate::components::highlight::HighlightGrid;

#[component]
pub fn Support() -> impl IntoView {
    view! {
        <main class="bg-[#F5F5F7] text-[#1D1D1F] min-h-screen">
            <section class="pt-32 pb-24">
                <div class="container mx-auto px-4 max-w-5xl">
                    <div class="text-center mb-16">
                        <h1 class="text-5xl md:text-7xl font-semibold mb-4">{HERO_TITLE}</h1>
                        <p class="text-2xl text-[#86868B]">{HERO_SUBTITLE}</p>
                    </div>
                    <HighlightGrid items=TOPICS class="grid grid-cols-1 md:grid-cols-2 gap-8" />
                </div>
            </section>
        </main>
    }
}
