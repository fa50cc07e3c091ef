use leptos::prelude::*;
use shavolts_core::Badge;

use super::icons::GlyphIcon;

/// Overlay badge in the top corner of a product card.
///
/// Sport, Premium and Studio badges draw their icon; every other kind is a
/// text pill colored by kind.
#[component]
pub fn CardBadge(badge: Badge, #[prop(optional)] reduced_motion: bool) -> impl IntoView {
    if let Some(glyph) = badge.kind.icon() {
        return view! {
            <span class="absolute top-4 right-4 z-10 text-[#0066FF]" title=badge.label>
                <GlyphIcon glyph=glyph class="w-6 h-6" />
            </span>
        }
        .into_any();
    }

    let class = if badge.kind.pulses() && !reduced_motion {
        "absolute top-4 left-4 z-10 px-3 py-1 rounded-full text-xs font-medium text-white animate-pulse"
    } else {
        "absolute top-4 left-4 z-10 px-3 py-1 rounded-full text-xs font-medium text-white"
    };
    let style = match badge.kind.border() {
        Some(border) => format!(
            "background-color: {}; border: 1px solid {}",
            badge.kind.color(),
            border
        ),
        None => format!("background-color: {}", badge.kind.color()),
    };

    view! {
        <span class=class style=style>
            {badge.label}
        </span>
    }
    .into_any()
}
