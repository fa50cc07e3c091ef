//! ShaSupport page content
//!
//! Help topics link to the same targets as the footer's support column.

use super::Highlight;
use crate::glyph::Glyph;

pub const HERO_TITLE: &str = "ShaSupport";
pub const HERO_SUBTITLE: &str = "We're here to help.";

pub const TOPICS: &[Highlight] = &[
    Highlight::new(
        Glyph::Video,
        "ShaHelp",
        "Talk to a ShaSpecialist by chat, phone or video.",
    )
    .linked("/contact"),
    Highlight::new(
        Glyph::Shield,
        "ShaCover",
        "Check your warranty and ShaCare+ coverage.",
    )
    .linked("/warranty"),
    Highlight::new(
        Glyph::Cpu,
        "ShaFix",
        "Book a repair or send your device in for service.",
    )
    .linked("/repairs"),
    Highlight::new(
        Glyph::ArrowLeftRight,
        "ShaTrade",
        "Find out what your old device is worth.",
    )
    .linked("/shatrade"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{footer_section, FooterSectionKey};

    #[test]
    fn test_topics_cover_footer_support_links() {
        let support = footer_section(FooterSectionKey::Support);
        for link in support.links {
            assert!(
                TOPICS.iter().any(|t| t.href == Some(link.href)),
                "no topic for {}",
                link.href
            );
        }
    }
}
