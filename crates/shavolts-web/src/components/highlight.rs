use leptos::prelude::*;
use shavolts_core::Highlight;

use super::icons::GlyphIcon;

#[component]
pub fn HighlightCard(highlight: Highlight, #[prop(optional)] dark: bool) -> impl IntoView {
    let (card, title) = if dark {
        ("p-8 rounded-2xl bg-[#1D1D1F] text-white h-full", "text-xl font-semibold mb-2")
    } else {
        ("p-8 rounded-2xl bg-white shadow-sm h-full", "text-xl font-semibold text-[#1D1D1F] mb-2")
    };

    let body = view! {
        <div class=card>
            <GlyphIcon glyph=highlight.glyph class="w-8 h-8 text-[#0066FF] mb-4" />
            <h3 class=title>{highlight.title}</h3>
            <p class="text-[#86868B]">{highlight.description}</p>
        </div>
    };

    match highlight.href {
        Some(href) => view! { <a href=href class="block hover:-translate-y-1 transition-transform">{body}</a> }.into_any(),
        None => body.into_any(),
    }
}

/// Highlight cards in input order
#[component]
pub fn HighlightGrid(
    items: &'static [Highlight],
    #[prop(optional)] dark: bool,
    #[prop(into, default = "grid grid-cols-1 md:grid-cols-3 gap-8".into())] class: String,
) -> impl IntoView {
    view! {
        <div class=class>
            {items
                .iter()
                .map(|highlight| view! { <HighlightCard highlight=*highlight dark=dark /> })
                .collect_view()}
        </div>
    }
}
