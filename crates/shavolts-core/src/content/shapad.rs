//! ShaPad product page content

use crate::catalog::{Badge, CatalogItem};
use crate::nav::NavLink;

pub const HERO_TITLE: &str = "SHAPAD PRO";
pub const HERO_VIDEO: &str =
    "https://www.apple.com/assets-www/en_WW/ipad/welcome/x1fba949bf_large.mp4";

/// In-page sub-navigation; targets are fragment anchors on this page
pub const SUB_NAV: &[NavLink] = &[
    NavLink::new("Overview", "#overview"),
    NavLink::new("Why ShaPad", "#why-shapad"),
    NavLink::new("Tech Specs", "#tech-specs"),
    NavLink::new("Compare", "#compare"),
    NavLink::new("Buy", "#buy"),
];

pub const GRID_TITLE: &str = "Which ShaPad is right for you?";

pub const PRODUCTS: &[CatalogItem] = &[
    CatalogItem::new(
        "ShaPad Pro 13\"",
        "From $1099",
        "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?auto=format&fit=crop&q=80&w=2560",
    )
    .with_badge(Badge::NEW)
    .with_features(&["13\" Liquid Retina XDR", "T18 Pro chip", "All-day battery"]),
    CatalogItem::new(
        "ShaPad Pro 11\"",
        "From $899",
        "https://images.unsplash.com/photo-1557825835-70d97c4aa567?auto=format&fit=crop&q=80&w=2560",
    )
    .with_features(&["11\" Liquid Retina", "T18 Pro chip", "All-day battery"]),
    CatalogItem::new(
        "ShaPad Air",
        "From $599",
        "https://images.unsplash.com/photo-1561154464-82e9adf32764?auto=format&fit=crop&q=80&w=2560",
    )
    .with_features(&["10.9\" Liquid Retina", "T17 chip", "All-day battery"]),
    CatalogItem::new(
        "ShaPad",
        "From $449",
        "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?auto=format&fit=crop&q=80&w=2560",
    )
    .with_features(&["10.2\" Retina", "T16 chip", "All-day battery"]),
    CatalogItem::new(
        "ShaPad Mini",
        "From $499",
        "https://images.unsplash.com/photo-1557825835-70d97c4aa567?auto=format&fit=crop&q=80&w=2560",
    )
    .with_features(&["8.3\" Liquid Retina", "T17 chip", "All-day battery"]),
];

pub const COMPARE_HREF: &str = "/compare";

/// Anchor id a sub-nav link points at (`"#why-shapad"` -> `"why-shapad"`)
pub fn anchor_id(link: &NavLink) -> &'static str {
    link.href.trim_start_matches('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_nav_targets_are_anchors() {
        assert!(SUB_NAV.iter().all(|link| link.href.starts_with('#')));
        assert_eq!(anchor_id(&SUB_NAV[1]), "why-shapad");
    }

    #[test]
    fn test_only_the_flagship_is_new() {
        let new: Vec<_> = PRODUCTS
            .iter()
            .filter(|p| p.badge.is_some())
            .map(|p| p.name)
            .collect();
        assert_eq!(new, ["ShaPad Pro 13\""]);
    }
}
