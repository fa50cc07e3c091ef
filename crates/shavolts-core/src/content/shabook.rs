//! ShaBook product page content

use super::Highlight;
use crate::catalog::{CatalogItem, ColorOption};
use crate::glyph::Glyph;

pub const HERO_TITLE: &str = "ShaBook Pro";
pub const HERO_SUBTITLE: &str = "Power. Beauty. Intelligence.";

pub const COLORS: &[ColorOption] = &[
    ColorOption::swatch(
        "Storm Gray",
        "#6E6E73",
        "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?ixlib=rb-4.0.3&auto=format&fit=crop&q=80&w=2560",
    ),
    ColorOption::swatch(
        "Electric Blue",
        "#0066FF",
        "https://images.unsplash.com/photo-1569770218135-bea267ed7e84?ixlib=rb-4.0.3&auto=format&fit=crop&q=80&w=2560",
    ),
    ColorOption::swatch(
        "Matte Black",
        "#1D1D1F",
        "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?ixlib=rb-4.0.3&auto=format&fit=crop&q=80&w=2560",
    ),
];

pub const SPECS: &[Highlight] = &[
    Highlight::new(Glyph::Cpu, "T18 Pro Chip", "40% faster than previous gen"),
    Highlight::new(Glyph::Battery, "22-Hour Battery", "All-day power, and then some"),
    Highlight::new(Glyph::Monitor, "Liquid Retina XDR", "500 nits of brightness"),
];

pub const VIDEO: &str = "https://www.apple.com/105/media/us/mac/family/2025/59856fc1-d007-421a-90ee-734ddf3fd25d/anim/welcome/large.mp4";
pub const VIDEO_TITLE: &str = "Engineered for Excellence";
pub const VIDEO_BODY: &str =
    "Experience the perfect blend of power and portability with the all-new ShaBook Pro.";

pub const LINEUP_TITLE: &str = "Explore the ShaBook Family";

pub const LINEUP: &[CatalogItem] = &[
    CatalogItem::new(
        "ShaBook Pro 16\"",
        "From $1999",
        "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?ixlib=rb-4.0.3&auto=format&fit=crop&q=80&w=2560",
    )
    .with_tagline("Ultimate power.")
    .with_features(&["T18 Pro Max chip", "16\" Liquid Retina XDR", "Up to 96GB RAM"]),
    CatalogItem::new(
        "ShaBook Air 15\"",
        "From $1299",
        "https://images.unsplash.com/photo-1611186871348-b1ce696e52c9?ixlib=rb-4.0.3&auto=format&fit=crop&q=80&w=2560",
    )
    .with_tagline("Thin. Light. Powerful.")
    .with_features(&["T18 chip", "15\" Liquid Retina", "Up to 24GB RAM"]),
    CatalogItem::new(
        "ShaBook SE",
        "From $999",
        "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?ixlib=rb-4.0.3&auto=format&fit=crop&q=80&w=2560",
    )
    .with_tagline("Serious capability.")
    .with_features(&["T17 chip", "13\" Retina", "Up to 16GB RAM"]),
];

/// A headline block with a bulleted list of points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureBlock {
    pub glyph: Glyph,
    pub title: &'static str,
    pub points: &'static [&'static str],
}

pub const PERFORMANCE_TITLE: &str = "Revolutionary Performance";
pub const PERFORMANCE_SUBTITLE: &str = "Powered by the all-new T18 Pro chip";

pub const PERFORMANCE: &[FeatureBlock] = &[
    FeatureBlock {
        glyph: Glyph::Cpu,
        title: "T18 Pro Chip",
        points: &["12-core CPU", "30-core GPU", "16-core Neural Engine"],
    },
    FeatureBlock {
        glyph: Glyph::Battery,
        title: "All-Day Battery",
        points: &[
            "Up to 22 hours",
            "Fast charging support",
            "Advanced power management",
        ],
    },
];

pub const PLANET_TITLE: &str = "Designed for the Planet";
pub const PLANET_BODY: &str =
    "100% recycled aluminum. Zero waste packaging. Leading the charge in sustainable tech.";
pub const PLANET_CTA: &str = "Learn about our efforts";

pub const CTA_TITLE: &str = "Transform Your Workspace";
pub const CTA_PRICE: &str = "Starting from $1999";
