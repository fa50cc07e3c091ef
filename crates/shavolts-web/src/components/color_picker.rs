use leptos::prelude::*;
use shavolts_core::palette;
use shavolts_core::ColorOption;

/// Pill buttons, one per color, each with its swatch dot
#[component]
pub fn ColorPicker(
    options: &'static [ColorOption],
    #[prop(into)] selected: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-4">
            {options
                .iter()
                .enumerate()
                .map(|(index, option)| {
                    let dot = format!("background-color: {}", option.hex.unwrap_or(palette::INK));
                    view! {
                        <button
                            on:click=move |_| on_select.run(index)
                            class=move || {
                                if selected.get() == index {
                                    "flex items-center gap-2 px-6 py-3 rounded-full bg-[#0066FF]/10 ring-1 ring-[#0066FF] transition-all"
                                } else {
                                    "flex items-center gap-2 px-6 py-3 rounded-full hover:bg-[#0066FF]/20 transition-all"
                                }
                            }
                            aria-pressed=move || (selected.get() == index).to_string()
                        >
                            <span class="w-3 h-3 rounded-full ring-1 ring-white/20" style=dot></span>
                            <span class="text-sm font-medium">{option.name}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
