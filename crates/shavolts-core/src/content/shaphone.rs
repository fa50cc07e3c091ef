//! ShaPhone product page content

use super::{Highlight, Panel};
use crate::catalog::{Badge, CatalogItem, ColorOption, StorageOption};
use crate::glyph::Glyph;

pub const COLORS: &[ColorOption] = &[
    ColorOption::swatch(
        "Electric Blue",
        "#0066FF",
        "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?auto=format&fit=crop&q=80&w=2560",
    ),
    ColorOption::swatch(
        "Storm Gray",
        "#6E6E73",
        "https://images.unsplash.com/photo-1581993192008-63e896f4f744?auto=format&fit=crop&q=80&w=2560",
    ),
    ColorOption::swatch(
        "Matte Black",
        "#1D1D1F",
        "https://images.unsplash.com/photo-1581993192008-63e896f4f744?auto=format&fit=crop&q=80&w=2560",
    ),
];

pub const SPECS: &[Highlight] = &[
    Highlight::new(Glyph::Cpu, "A17 Thunder Chip", "40% faster than previous gen"),
    Highlight::new(Glyph::Camera, "48MP Pro Camera", "Revolutionary lens system"),
    Highlight::new(Glyph::Battery, "All-Day Battery", "27 hours video playback"),
];

pub const STORAGE: &[StorageOption] = &[
    StorageOption {
        size: "128GB",
        price: 999,
    },
    StorageOption {
        size: "256GB",
        price: 1099,
    },
    StorageOption {
        size: "512GB",
        price: 1299,
    },
    StorageOption {
        size: "1TB",
        price: 1499,
    },
];

pub const CUSTOMIZE_TITLE: &str = "Make It Yours";
pub const STORAGE_TITLE: &str = "Choose Your Storage";
pub const SHACARE_TITLE: &str = "ShaCare+";
pub const SHACARE_BLURB: &str = "Complete protection for your ShaPhone";

pub const LINEUP_TITLE: &str = "Explore the Lineup";

pub const LINEUP: &[CatalogItem] = &[
    CatalogItem::new(
        "ShaPhone 16 Pro",
        "From $999",
        "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?auto=format&fit=crop&q=80&w=800",
    )
    .with_badge(Badge::NEW)
    .with_features(&[
        "6.7\" Super Retina XDR display",
        "A17 Thunder chip",
        "Pro camera system",
    ]),
    CatalogItem::new(
        "ShaPhone 16",
        "From $799",
        "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?auto=format&fit=crop&q=80&w=800",
    )
    .with_badge(Badge::NEW)
    .with_features(&[
        "6.1\" Retina XDR display",
        "A17 chip",
        "Advanced dual camera",
    ]),
    CatalogItem::new(
        "ShaPhone 16 Lite",
        "From $699",
        "https://images.unsplash.com/photo-1580910051074-3eb694886505?auto=format&fit=crop&q=80&w=800",
    )
    .with_badge(Badge::NEW)
    .with_features(&["5.9\" Retina display", "A16 chip", "Dual camera system"]),
];

pub const COMPARE_HREF: &str = "/compare";

/// One column of the "SHA Intelligence" comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipColumn {
    pub model: &'static str,
    pub chip: &'static str,
    /// Chip blurb before the highlighted part
    pub chip_detail: &'static str,
    /// Highlighted tail of the blurb, if any
    pub chip_accent: Option<&'static str>,
    pub camera: &'static str,
    pub camera_features: &'static [&'static str],
}

pub const INTELLIGENCE_TITLE: &str = "SHA Intelligence";

pub const INTELLIGENCE: &[ChipColumn] = &[
    ChipColumn {
        model: "ShaPhone 16 Pro",
        chip: "T18 Pro",
        chip_detail: "T18 Pro chip with ",
        chip_accent: Some("6-core GPU"),
        camera: "Pro Camera System",
        camera_features: &["48MP ThunderFusion", "5x Telephoto", "48MP Ultra Wide"],
    },
    ChipColumn {
        model: "ShaPhone 16",
        chip: "T18",
        chip_detail: "T18 chip with 5-core GPU",
        chip_accent: None,
        camera: "Advanced Dual Camera",
        camera_features: &["48MP ThunderFusion", "2x Telephoto", "12MP Ultra Wide"],
    },
    ChipColumn {
        model: "ShaPhone 16 Lite",
        chip: "T18",
        chip_detail: "T18 chip with 4-core GPU",
        chip_accent: None,
        camera: "2-in-1 Camera System",
        camera_features: &["48MP ThunderFusion", "2x Telephoto"],
    },
];

/// Disclosure id of the narrow-viewport full specifications panel
pub const MOBILE_SPECS_PANEL: &str = "specs";
pub const MOBILE_SPECS_LABEL: &str = "View Full Specifications";

pub const WHY_TITLE: &str = "Why ShaVolts";

/// Panels of the "Why ShaVolts" disclosure group
pub const WHY_PANELS: &[Panel] = &[
    Panel {
        id: "sustainability",
        glyph: Glyph::Recycle,
        title: "Sustainability",
        body: "100% recycled materials. Zero waste packaging. Leading the charge in sustainable tech.",
    },
    Panel {
        id: "shacare",
        glyph: Glyph::Shield,
        title: "ShaCare+",
        body: "Complete protection with 24/7 priority support. Includes accidental damage coverage and express replacement.",
    },
];

pub const CTA_TITLE: &str = "Power Up Your Life";
pub const CTA_BUTTON: &str = "Buy Now";
