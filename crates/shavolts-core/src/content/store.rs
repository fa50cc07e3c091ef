//! ShaStore: hero carousel, featured grid, promo banners, "Why ShaVolts"

use super::Highlight;
use crate::catalog::CatalogItem;
use crate::glyph::Glyph;
use crate::nav::NavLink;

/// One full-screen carousel slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide {
        title: "ShaPhone 15 Pro",
        subtitle: "Charge Faster. Last Longer.",
        image: "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?ixlib=rb-4.0.3&auto=format&fit=crop&q=80&w=2560",
    },
    Slide {
        title: "ShaBook Air",
        subtitle: "Thunderbolt Speed. All-Day Power.",
        image: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?ixlib=rb-4.0.3&auto=format&fit=crop&q=80&w=2560",
    },
];

pub const FEATURED: &[CatalogItem] = &[
    CatalogItem::new(
        "ShaWatch UURA2",
        "From $599",
        "https://images.unsplash.com/photo-1434494878577-86c23bcb06b9?auto=format&fit=crop&q=80&w=2560",
    )
    .with_tagline("Lightning-Fast Performance"),
    CatalogItem::new(
        "ShaPad Pro",
        "From $799",
        "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?auto=format&fit=crop&q=80&w=2560",
    )
    .with_tagline("Create Without Limits"),
    CatalogItem::new(
        "ShaPhone 15",
        "From $999",
        "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?auto=format&fit=crop&q=80&w=2560",
    )
    .with_tagline("Power Meets Innovation"),
    CatalogItem::new(
        "ShaBook Pro",
        "From $1299",
        "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=format&fit=crop&q=80&w=2560",
    )
    .with_tagline("Revolutionary Performance"),
];

/// A promotional banner card with a single call-to-action link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoBanner {
    pub title: &'static str,
    pub body: &'static str,
    pub link: NavLink,
}

pub const PROMOS: &[PromoBanner] = &[
    PromoBanner {
        title: "Trade In & Save",
        body: "Get $200\u{2013}800 credit when you trade in a ShaPhone 12 or higher. \u{25CA}",
        link: NavLink::new("Check trade-in value", "/trade-in"),
    },
    PromoBanner {
        title: "ShaRewards Card",
        body: "5% back in ShaSpark Points on every purchase.",
        link: NavLink::new("Apply now", "/rewards"),
    },
];

pub const WHY_TITLE: &str = "Why ShaVolts";

pub const WHY_SHAVOLTS: &[Highlight] = &[
    Highlight::new(
        Glyph::Recycle,
        "100% Recyclable Materials",
        "Committed to environmental sustainability",
    ),
    Highlight::new(
        Glyph::Clock,
        "24/7 ShaCare+ Support",
        "Expert help, whenever you need it",
    ),
    Highlight::new(
        Glyph::Truck,
        "Free 2-Day Shipping",
        "Fast and reliable delivery",
    ),
];
