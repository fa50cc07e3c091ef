//! Home page: hero, new arrivals, ShaWatch promo

use crate::catalog::{Badge, CatalogItem};

/// Sections of the home page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    Hero,
    NewArrivals,
    WatchPromo,
}

pub const SECTIONS: &[HomeSection] = &[
    HomeSection::Hero,
    HomeSection::NewArrivals,
    HomeSection::WatchPromo,
];

pub const HERO_HEADING: &str = "Where Technology Meets Elegance";
pub const HERO_SUBHEADING: &str = "Powering Innovation, Electrifying Lives";
pub const HERO_CTA: &str = "Explore Now";
pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1531297484001-80022131f5a1?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=2560&q=80";

pub const NEW_ARRIVALS_TITLE: &str = "New Arrivals";

pub const NEW_ARRIVALS: &[CatalogItem] = &[
    CatalogItem::new(
        "EcoPhone Pro",
        "$999",
        "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&q=80",
    )
    .with_badge(Badge::JUST_IN),
    CatalogItem::new(
        "SmartWatch Elite",
        "$299",
        "https://images.unsplash.com/photo-1546868871-7041f2a55e12?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&q=80",
    )
    .with_badge(Badge::JUST_IN),
    CatalogItem::new(
        "PowerBook Air",
        "$1299",
        "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&q=80",
    )
    .with_badge(Badge::JUST_IN),
];

/// Full-screen ShaWatch teaser with a live clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchPromo {
    pub title: &'static str,
    pub model: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
    pub buy_label: &'static str,
    pub learn_more_label: &'static str,
}

pub const WATCH_PROMO: WatchPromo = WatchPromo {
    title: "SHAWATCH",
    model: "UURA2",
    tagline: "Built for the storm.",
    image: "https://images.unsplash.com/photo-1434494878577-86c23bcb06b9?auto=format&fit=crop&q=80&w=2560",
    buy_label: "Buy",
    learn_more_label: "Learn more \u{2192}",
};
