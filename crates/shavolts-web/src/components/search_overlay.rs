use leptos::html;
use leptos::prelude::*;

use super::icons::{self, Icon};

/// Full-width search bar shown over the page. The text is never submitted.
#[component]
pub fn SearchOverlay(
    #[prop(into)] placeholder: String,
    input_ref: NodeRef<html::Input>,
    #[prop(into)] on_cancel: Callback<()>,
    /// Light backdrop, for sub-navs drawn on white
    #[prop(optional)]
    light: bool,
) -> impl IntoView {
    let (backdrop, field) = if light {
        (
            "fixed inset-0 z-[60] bg-white/95 backdrop-blur-md",
            "w-full bg-transparent text-[#1D1D1F] text-xl placeholder-[#86868B] outline-none",
        )
    } else {
        (
            "fixed inset-0 z-[60] bg-black/95 backdrop-blur-md",
            "w-full bg-transparent text-white text-xl placeholder-[#86868B] outline-none",
        )
    };

    view! {
        <div class=backdrop>
            <div class="max-w-3xl mx-auto px-6 pt-16 flex items-center gap-4">
                <Icon paths=icons::SEARCH class="w-5 h-5 text-[#86868B] shrink-0" />
                <input
                    node_ref=input_ref
                    type="search"
                    placeholder=placeholder
                    class=field
                />
                <button
                    on:click=move |_| on_cancel.run(())
                    class="text-sm text-[#0066FF] hover:underline"
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
