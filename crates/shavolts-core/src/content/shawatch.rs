//! ShaWatch product page content

use super::Highlight;
use crate::catalog::{Badge, BadgeKind, CatalogItem};
use crate::glyph::Glyph;
use crate::nav::NavLink;

pub const HERO_TITLE: &str = "SHAWATCH";
pub const HERO_SUBTITLE: &str = "The ultimate device for an electrified life.";

pub const WATCHES: &[CatalogItem] = &[
    CatalogItem::new(
        "ShaWatch Series 10",
        "From $399",
        "https://images.unsplash.com/photo-1434494878577-86c23bcb06b9?auto=format&fit=crop&q=80&w=800",
    )
    .with_badge(Badge::NEW),
    CatalogItem::new(
        "ShaWatch Ultra 2",
        "From $799",
        "https://images.unsplash.com/photo-1546868871-7041f2a55e12?auto=format&fit=crop&q=80&w=800",
    )
    .with_badge(Badge::new(BadgeKind::Rugged, "Rugged")),
    CatalogItem::new(
        "ShaWatch SE",
        "From $249",
        "https://images.unsplash.com/photo-1509386175345-24d4e16ae35f?auto=format&fit=crop&q=80&w=800",
    )
    .with_badge(Badge::new(BadgeKind::Budget, "Budget")),
    CatalogItem::new(
        "ShaWatch Sport",
        "From $499",
        "https://images.unsplash.com/photo-1517841905240-472988babdf9?auto=format&fit=crop&q=80&w=800",
    )
    .with_badge(Badge::new(BadgeKind::Sport, "Sweat-proof")),
    CatalogItem::new(
        "ShaWatch Luxe",
        "From $999",
        "https://images.unsplash.com/photo-1524805444758-089113d48a6d?auto=format&fit=crop&q=80&w=800",
    )
    .with_badge(Badge::new(BadgeKind::Premium, "Premium")),
    CatalogItem::new(
        "ShaWatch Studio",
        "From $599",
        "https://images.unsplash.com/photo-1533139502658-0198f920d8e8?auto=format&fit=crop&q=80&w=800",
    )
    .with_badge(Badge::new(BadgeKind::Studio, "Customize")),
];

/// A link in the row under the watch grid, optionally led by an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryLink {
    pub link: NavLink,
    pub glyph: Option<Glyph>,
}

impl SecondaryLink {
    const fn plain(label: &'static str, href: &'static str) -> Self {
        Self {
            link: NavLink::new(label, href),
            glyph: None,
        }
    }
}

pub const SECONDARY_LINKS: &[SecondaryLink] = &[
    SecondaryLink::plain("Compare", "/compare"),
    SecondaryLink {
        link: NavLink::new("ShaStraps", "/shastraps"),
        glyph: Some(Glyph::Bolt),
    },
    SecondaryLink::plain("ShaGear", "/shagear"),
    SecondaryLink::plain("ShaFit+", "/shafit-plus"),
    SecondaryLink::plain("ShaOS 11", "/shaos"),
];

pub const OFFER: &str = "Get 3 months of ShaFit+ with any ShaWatch\u{b9}";
pub const SHOP: NavLink = NavLink::new("Shop ShaWatch", "/shop");

pub const VIDEO: &str = "https://www.apple.com/105/media/us/watch/2024/f0b51c31-e8a5-44d7-b23d-51bd2858454a/anim/hero/medium_2x.mp4#t=2.522569";

pub const BENEFITS_TITLE: &str = "Why ShaVolts is the best place to buy ShaWatch.";

pub const BENEFITS: &[Highlight] = &[
    Highlight::new(
        Glyph::CreditCard,
        "Pay over time, interest-free.",
        "When you choose ShaPay Monthly Installments.*",
    )
    .linked("/shapay"),
    Highlight::new(
        Glyph::ArrowLeftRight,
        "Save with ShaTrade.",
        "Get up to $150 toward your next ShaWatch when you trade in an eligible device.*",
    )
    .linked("/shatrade"),
    Highlight::new(
        Glyph::Truck,
        "Get flexible delivery & easy pickup.",
        "Choose 2-hour delivery, free shipping, or in-store pickup.",
    )
    .linked("/delivery"),
    Highlight::new(
        Glyph::Video,
        "Shop live with a ShaSpecialist.",
        "Video chat with our experts for personalized help.",
    )
    .linked("/support"),
];

pub const TERMS_NOTE: &str = "* Terms and conditions apply.";
pub const TERMS_LINK: NavLink = NavLink::new("Learn more", "/terms");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_watch_has_a_badge() {
        assert!(WATCHES.iter().all(|w| w.badge.is_some()));
        let icon_badges = WATCHES
            .iter()
            .filter_map(|w| w.badge)
            .filter(|b| b.kind.icon().is_some())
            .count();
        assert_eq!(icon_badges, 3);
    }

    #[test]
    fn test_benefit_cards_are_links() {
        assert!(BENEFITS.iter().all(|card| card.href.is_some()));
    }
}
