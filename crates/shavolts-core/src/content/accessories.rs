//! ShaAccessories page content

use crate::catalog::{Badge, CatalogItem, ColorOption};
use crate::glyph::Glyph;
use crate::nav::NavLink;

pub const HERO_TITLE: &str = "Find the accessories you're looking for.";
pub const SEARCH_PLACEHOLDER: &str = "Search accessories";

/// A product family shortcut in the category strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub glyph: Glyph,
}

impl Category {
    /// In-page anchor for this category (`"ShaVision Pro"` -> `"#shavisionpro"`)
    pub fn anchor(&self) -> String {
        let id: String = self
            .name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        format!("#{id}")
    }
}

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "ShaBook",
        glyph: Glyph::Laptop,
    },
    Category {
        name: "ShaPad",
        glyph: Glyph::Tablet,
    },
    Category {
        name: "ShaPhone",
        glyph: Glyph::Smartphone,
    },
    Category {
        name: "ShaWatch",
        glyph: Glyph::Watch,
    },
    Category {
        name: "ShaVision Pro",
        glyph: Glyph::Gamepad,
    },
];

pub const PHONE_TITLE: &str = "Featured ShaPhone Accessories";
pub const PHONE_SHOP_ALL: NavLink =
    NavLink::new("Shop all ShaPhone accessories", "/shaphone-accessories");

pub const PHONE_ACCESSORIES: &[CatalogItem] = &[
    CatalogItem::new(
        "ShaPower MagSafe Charger",
        "$39.00",
        "https://images.unsplash.com/photo-1589492477829-5e65395b66cc?auto=format&fit=crop&q=80&w=800",
    )
    .with_colors(&[
        ColorOption::named("Sky"),
        ColorOption::named("Pink"),
        ColorOption::named("Yellow"),
    ])
    .with_badge(Badge::NEW),
    CatalogItem::new(
        "ShaPhone 16 Pro Clear Case",
        "$49.00",
        "https://images.unsplash.com/photo-1587855049254-351f4e55fe2a?auto=format&fit=crop&q=80&w=800",
    )
    .with_colors(&[ColorOption::named("Clear"), ColorOption::named("Black")]),
    CatalogItem::new(
        "ShaPower Battery Pack",
        "$99.00",
        "https://images.unsplash.com/photo-1600490722773-35753aea6332?auto=format&fit=crop&q=80&w=800",
    )
    .with_colors(&[ColorOption::named("White"), ColorOption::named("Black")])
    .with_badge(Badge::NEW),
];

pub const PAD_TITLE: &str = "Featured ShaPad Accessories";
pub const PAD_SHOP_ALL: NavLink = NavLink::new("Shop all ShaPad accessories", "/shapad-accessories");

pub const PAD_ACCESSORIES: &[CatalogItem] = &[
    CatalogItem::new(
        "ShaPencil (USB-C)",
        "$79.00",
        "https://images.unsplash.com/photo-1625772299848-391b6a87d7b3?auto=format&fit=crop&q=80&w=800",
    ),
    CatalogItem::new(
        "Magic Keyboard for ShaPad",
        "$249.00",
        "https://images.unsplash.com/photo-1587033411391-5d9e51cce126?auto=format&fit=crop&q=80&w=800",
    )
    .with_colors(&[ColorOption::named("White"), ColorOption::named("Black")]),
    CatalogItem::new(
        "Smart Folio for ShaPad",
        "$79.00",
        "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?auto=format&fit=crop&q=80&w=800",
    )
    .with_colors(&[
        ColorOption::named("Sky"),
        ColorOption::named("Pink"),
        ColorOption::named("Yellow"),
    ])
    .with_badge(Badge::NEW),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_anchor_drops_spaces() {
        assert_eq!(CATEGORIES[0].anchor(), "#shabook");
        assert_eq!(CATEGORIES[4].anchor(), "#shavisionpro");
    }

    #[test]
    fn test_accessory_colors_are_names_only() {
        let all = PHONE_ACCESSORIES.iter().chain(PAD_ACCESSORIES);
        for item in all {
            assert!(item.colors.iter().all(|c| c.hex.is_none() && c.image.is_none()));
        }
        assert!(PAD_ACCESSORIES[0].colors.is_empty());
    }
}
