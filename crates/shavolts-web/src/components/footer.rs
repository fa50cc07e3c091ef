use leptos::prelude::*;
use shavolts_app::message::FooterMessage;
use shavolts_app::state::FooterState;
use shavolts_core::{FOOTER_SECTIONS, LEGAL_LINKS};

use super::icons::{self, Icon};
use crate::hooks::{perform, send, use_settings};

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = use_settings().site.copyright;
    let state = RwSignal::new(FooterState::new());

    view! {
        <footer class="bg-[#F5F5F7] text-[#86868B] text-xs mt-auto">
            <div class="max-w-5xl mx-auto px-4 py-10">
                <div class="grid grid-cols-1 md:grid-cols-5 gap-4 md:gap-8 border-b border-[#D2D2D7] pb-8">
                    {FOOTER_SECTIONS
                        .iter()
                        .map(|section| {
                            let key = section.key;
                            let expanded = move || state.with(|s| s.is_expanded(key));
                            view! {
                                <div class="border-b border-[#D2D2D7] md:border-none">
                                    <button
                                        on:click=move |_| {
                                            perform(send(state, FooterMessage::ToggleSection(key)), None)
                                        }
                                        class="w-full flex items-center justify-between py-3 md:py-0 md:mb-3 md:cursor-default"
                                    >
                                        <span class="font-semibold text-[#1D1D1F]">{section.title}</span>
                                        <span class=move || {
                                            if expanded() {
                                                "md:hidden transition-transform rotate-180"
                                            } else {
                                                "md:hidden transition-transform"
                                            }
                                        }>
                                            <Icon paths=icons::CHEVRON_DOWN class="w-4 h-4" />
                                        </span>
                                    </button>
                                    <ul class=move || {
                                        if expanded() { "space-y-2 pb-4 md:pb-0" } else { "space-y-2 hidden md:block" }
                                    }>
                                        {section
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href=link.href class="hover:underline">
                                                            {link.label}
                                                        </a>
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

                <div class="pt-6 flex flex-col md:flex-row justify-between gap-4">
                    <p>{copyright}</p>
                    <div class="flex flex-wrap gap-x-4 gap-y-2">
                        {LEGAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="hover:underline">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
