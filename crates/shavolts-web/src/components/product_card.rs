use leptos::prelude::*;
use leptos_router::components::A;
use shavolts_core::CatalogItem;

use super::badge::CardBadge;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum CardTheme {
    #[default]
    Light,
    Dark,
}

impl CardTheme {
    fn card(self) -> &'static str {
        match self {
            CardTheme::Light => "relative bg-white rounded-2xl p-6 shadow-sm hover:shadow-lg transition-shadow flex flex-col",
            CardTheme::Dark => "relative bg-[#1D1D1F] rounded-2xl p-6 hover:shadow-[0_8px_24px_rgba(0,102,255,0.15)] transition-shadow flex flex-col text-white",
        }
    }

    fn title(self) -> &'static str {
        match self {
            CardTheme::Light => "text-2xl font-medium text-[#1D1D1F] mb-1",
            CardTheme::Dark => "text-2xl font-medium text-white mb-1",
        }
    }
}

/// One catalog item as a card: badge, image, name, optional tagline, price,
/// features, color names and the call-to-action row.
///
/// The primary button is decorative. `learn_more` adds a secondary link.
#[component]
pub fn ProductCard(
    item: CatalogItem,
    #[prop(into, default = "Buy".into())] cta: String,
    #[prop(default = None)] learn_more: Option<String>,
    #[prop(optional)] theme: CardTheme,
    #[prop(optional)] reduced_motion: bool,
) -> impl IntoView {
    let image_class = if reduced_motion {
        "w-full h-full object-cover"
    } else {
        "w-full h-full object-cover transition-transform duration-500 hover:scale-105"
    };

    view! {
        <div class=theme.card()>
            {item.badge.map(|badge| view! { <CardBadge badge=badge reduced_motion=reduced_motion /> })}

            <div class="aspect-square mb-6 overflow-hidden rounded-xl bg-[#F5F5F7]">
                <img src=item.image alt=item.name loading="lazy" class=image_class />
            </div>

            <h3 class=theme.title()>{item.name}</h3>
            {item.tagline.map(|tagline| view! { <p class="text-sm text-[#86868B] mb-2">{tagline}</p> })}
            <p class="text-[#86868B] mb-4">{item.price}</p>

            {(!item.features.is_empty())
                .then(|| {
                    view! {
                        <ul class="space-y-2 mb-6 text-sm">
                            {item.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                        </ul>
                    }
                })}

            {(!item.colors.is_empty())
                .then(|| {
                    let names = item.colors.iter().map(|c| c.name).collect::<Vec<_>>().join(", ");
                    view! { <p class="text-xs text-[#86868B] mb-4">{names}</p> }
                })}

            <div class="mt-auto flex items-center gap-4">
                <button class="px-5 py-2 rounded-full bg-[#0066FF] text-white text-sm hover:bg-[#0066FF]/90 transition-colors">
                    {cta}
                </button>
                {learn_more
                    .map(|href| {
                        view! {
                            <A href=href attr:class="text-sm text-[#0066FF] hover:underline">
                                "Learn more \u{2192}"
                            </A>
                        }
                    })}
            </div>
        </div>
    }
}

/// Cards for `items`, in order
#[component]
pub fn ProductGrid(
    items: &'static [CatalogItem],
    #[prop(into, default = "Buy".into())] cta: String,
    #[prop(optional)] theme: CardTheme,
    #[prop(optional)] reduced_motion: bool,
    /// Link each card's "Learn more" to `/<slug>`
    #[prop(optional)]
    link_slugs: bool,
    #[prop(into, default = "grid grid-cols-1 md:grid-cols-3 gap-8".into())] class: String,
) -> impl IntoView {
    view! {
        <div class=class>
            {items
                .iter()
                .map(|item| {
                    let learn_more = link_slugs.then(|| format!("/{}", item.slug()));
                    view! {
                        <ProductCard
                            item=*item
                            cta=cta.clone()
                            learn_more=learn_more
                            theme=theme
                            reduced_motion=reduced_motion
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
