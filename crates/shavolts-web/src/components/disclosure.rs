use leptos::prelude::*;
use shavolts_core::Glyph;

use super::icons::{self, GlyphIcon, Icon};

/// A titled row that shows its children while `open` holds
#[component]
pub fn DisclosurePanel(
    #[prop(into)] title: String,
    #[prop(default = None)] glyph: Option<Glyph>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="rounded-xl bg-black/40 overflow-hidden">
            <button
                on:click=move |_| on_toggle.run(())
                class="w-full p-6 flex items-center justify-between text-left"
                aria-expanded=move || open.get().to_string()
            >
                <span class="flex items-center gap-3 text-lg font-medium">
                    {glyph.map(|glyph| view! { <GlyphIcon glyph=glyph class="w-6 h-6 text-[#0066FF]" /> })}
                    {title}
                </span>
                <span class=move || {
                    if open.get() { "transition-transform rotate-180" } else { "transition-transform" }
                }>
                    <Icon paths=icons::CHEVRON_DOWN class="w-6 h-6" />
                </span>
            </button>
            <Show when=move || open.get()>
                <div class="px-6 pb-6 text-[#86868B]">{children()}</div>
            </Show>
        </div>
    }
}
