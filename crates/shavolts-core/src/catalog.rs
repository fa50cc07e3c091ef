//! Catalog record types
//!
//! Every record is a compile-time literal. Optional parts of a product
//! (badge, colors, features, tagline) are typed rather than loosely shaped, so
//! a renderer can branch on presence alone.

use crate::glyph::Glyph;

/// A static display record describing one product or accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    /// Display name, unique within its containing list
    pub name: &'static str,
    /// Price label exactly as displayed (e.g. "From $999", "$39.00")
    pub price: &'static str,
    pub image: &'static str,
    pub tagline: Option<&'static str>,
    pub features: &'static [&'static str],
    pub colors: &'static [ColorOption],
    pub badge: Option<Badge>,
}

impl CatalogItem {
    /// A bare item with only the required fields set
    pub const fn new(name: &'static str, price: &'static str, image: &'static str) -> Self {
        Self {
            name,
            price,
            image,
            tagline: None,
            features: &[],
            colors: &[],
            badge: None,
        }
    }

    pub const fn with_tagline(self, tagline: &'static str) -> Self {
        Self {
            tagline: Some(tagline),
            ..self
        }
    }

    pub const fn with_features(self, features: &'static [&'static str]) -> Self {
        Self { features, ..self }
    }

    pub const fn with_colors(self, colors: &'static [ColorOption]) -> Self {
        Self { colors, ..self }
    }

    pub const fn with_badge(self, badge: Badge) -> Self {
        Self {
            badge: Some(badge),
            ..self
        }
    }

    /// URL slug derived from the display name: lowercased, whitespace removed.
    ///
    /// `"ShaPhone 16 Pro"` becomes `"shaphone16pro"`.
    pub fn slug(&self) -> String {
        self.name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

/// A selectable color/finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub hex: Option<&'static str>,
    /// Hero image shown while this color is selected
    pub image: Option<&'static str>,
}

impl ColorOption {
    /// A swatch with a hex value and a hero image
    pub const fn swatch(name: &'static str, hex: &'static str, image: &'static str) -> Self {
        Self {
            name,
            hex: Some(hex),
            image: Some(image),
        }
    }

    /// A color known only by name (accessory finishes)
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            hex: None,
            image: None,
        }
    }
}

/// A storage tier with its whole-dollar price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageOption {
    pub size: &'static str,
    pub price: u32,
}

/// Kind of decorative badge overlaid on a product card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    New,
    JustIn,
    Rugged,
    Budget,
    Sport,
    Premium,
    Studio,
}

impl BadgeKind {
    /// Icon drawn in place of a text pill, for kinds that have one
    pub fn icon(self) -> Option<Glyph> {
        match self {
            BadgeKind::Sport => Some(Glyph::Bolt),
            BadgeKind::Premium => Some(Glyph::Crown),
            BadgeKind::Studio => Some(Glyph::Palette),
            _ => None,
        }
    }

    /// Fill color of the text pill
    pub fn color(self) -> &'static str {
        match self {
            BadgeKind::New | BadgeKind::JustIn => crate::palette::PRIMARY,
            BadgeKind::Rugged => "#000000",
            BadgeKind::Budget => crate::palette::SECONDARY_TEXT,
            BadgeKind::Sport | BadgeKind::Premium | BadgeKind::Studio => crate::palette::PRIMARY,
        }
    }

    /// Border color, for kinds that draw one
    pub fn border(self) -> Option<&'static str> {
        match self {
            BadgeKind::Rugged => Some(crate::palette::PRIMARY),
            _ => None,
        }
    }

    /// Whether the badge pulses (suppressed under reduced motion)
    pub fn pulses(self) -> bool {
        matches!(self, BadgeKind::New | BadgeKind::JustIn)
    }
}

/// A small decorative label on a product card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub label: &'static str,
}

impl Badge {
    pub const fn new(kind: BadgeKind, label: &'static str) -> Self {
        Self { kind, label }
    }

    pub const NEW: Badge = Badge::new(BadgeKind::New, "New");
    pub const JUST_IN: Badge = Badge::new(BadgeKind::JustIn, "Just In");
}

/// Format a whole-dollar price the way the site prints it (`$1099`, no separators)
pub fn format_price(dollars: u32) -> String {
    format!("${dollars}")
}

/// Check the display-key invariant: names are unique within a list
pub fn names_are_unique(items: &[CatalogItem]) -> bool {
    let mut names: Vec<&str> = items.iter().map(|i| i.name).collect();
    names.sort_unstable();
    names.windows(2).all(|w| w[0] != w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_strips_whitespace_and_lowercases() {
        let item = CatalogItem::new("ShaPhone 16 Pro", "From $999", "");
        assert_eq!(item.slug(), "shaphone16pro");
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        const FEATURES: &[&str] = &["A17 chip"];
        let item = CatalogItem::new("X", "$1", "img")
            .with_tagline("Fast.")
            .with_features(FEATURES)
            .with_badge(Badge::NEW);
        assert_eq!(item.tagline, Some("Fast."));
        assert_eq!(item.features, FEATURES);
        assert_eq!(item.badge, Some(Badge::NEW));
        assert!(item.colors.is_empty());
    }

    #[test]
    fn test_icon_badges() {
        assert_eq!(BadgeKind::Sport.icon(), Some(Glyph::Bolt));
        assert_eq!(BadgeKind::Premium.icon(), Some(Glyph::Crown));
        assert_eq!(BadgeKind::Studio.icon(), Some(Glyph::Palette));
        assert_eq!(BadgeKind::New.icon(), None);
        assert_eq!(BadgeKind::Rugged.border(), Some("#0066FF"));
        assert_eq!(BadgeKind::Budget.border(), None);
    }

    #[test]
    fn test_format_price_has_no_separators() {
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(1099), "$1099");
    }

    #[test]
    fn test_names_are_unique_detects_duplicates() {
        let a = CatalogItem::new("A", "$1", "");
        let b = CatalogItem::new("B", "$1", "");
        assert!(names_are_unique(&[a, b]));
        assert!(!names_are_unique(&[a, b, a]));
        assert!(names_are_unique(&[]));
    }
}
