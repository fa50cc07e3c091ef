use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use shavolts_core::NavLink;

use super::icons::{self, Icon};

/// Full-screen link list for narrow viewports.
///
/// Route links go through the router. With `in_page` set the links are
/// `#anchor` targets and the browser default is suppressed so the caller can
/// scroll instead.
#[component]
pub fn MobileMenu(
    links: &'static [NavLink],
    #[prop(into)] on_select: Callback<&'static str>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] in_page: bool,
    #[prop(optional)] light: bool,
) -> impl IntoView {
    let (backdrop, link_class) = if light {
        (
            "fixed inset-0 z-[60] bg-white md:hidden overflow-y-auto",
            "block py-3 text-2xl font-semibold text-[#1D1D1F] border-b border-[#D2D2D7] hover:text-[#0066FF] transition-colors",
        )
    } else {
        (
            "fixed inset-0 z-[60] bg-black md:hidden overflow-y-auto",
            "block py-3 text-2xl font-semibold text-white border-b border-white/10 hover:text-[#0066FF] transition-colors",
        )
    };

    view! {
        <div class=backdrop>
            <div class="px-6 h-11 flex items-center justify-end">
                <button
                    on:click=move |_| on_close.run(())
                    class="flex items-center text-sm text-[#86868B] hover:text-[#0066FF]"
                >
                    <Icon paths=icons::CLOSE class="w-5 h-5 mr-1" />
                    "Close"
                </button>
            </div>
            <nav class="px-8 pt-4">
                {links
                    .iter()
                    .map(|link| {
                        let href = link.href;
                        if in_page {
                            view! {
                                <a
                                    href=href
                                    class=link_class
                                    on:click=move |e: ev::MouseEvent| {
                                        e.prevent_default();
                                        on_select.run(href);
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                            .into_any()
                        } else {
                            view! {
                                <A
                                    href=href
                                    attr:class=link_class
                                    on:click=move |_| on_select.run(href)
                                >
                                    {link.label}
                                </A>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
