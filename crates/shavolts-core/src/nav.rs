//! Navigation data: main header links and footer sections

use std::fmt;

use crate::route::Route;

/// A labelled link. The target need not be a registered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    /// The registered page this link opens, if any
    pub fn route(&self) -> Option<Route> {
        Route::from_path(self.href)
    }
}

/// Header links, shown inline on wide viewports and in the mobile menu
pub const MAIN_NAV: &[NavLink] = &[
    NavLink::new("ShaStore", "/store"),
    NavLink::new("ShaPhone", "/shaphone"),
    NavLink::new("ShaBook", "/shabook"),
    NavLink::new("ShaPad", "/shapad"),
    NavLink::new("ShaWatch", "/shawatch"),
    NavLink::new("ShaAccessories", "/accessories"),
    NavLink::new("ShaSupport", "/support"),
];

pub const BAG_HREF: &str = "/bag";

/// Identifier of a footer column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FooterSectionKey {
    Shop,
    Services,
    Sustainability,
    About,
    Support,
}

impl FooterSectionKey {
    pub const ALL: [FooterSectionKey; 5] = [
        FooterSectionKey::Shop,
        FooterSectionKey::Services,
        FooterSectionKey::Sustainability,
        FooterSectionKey::About,
        FooterSectionKey::Support,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FooterSectionKey::Shop => "shop",
            FooterSectionKey::Services => "services",
            FooterSectionKey::Sustainability => "sustainability",
            FooterSectionKey::About => "about",
            FooterSectionKey::Support => "support",
        }
    }
}

impl fmt::Display for FooterSectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled footer column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSection {
    pub key: FooterSectionKey,
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        key: FooterSectionKey::Shop,
        title: "Shop",
        links: &[
            NavLink::new("ShaStore", "/store"),
            NavLink::new("ShaPhone", "/shaphone"),
            NavLink::new("ShaBook", "/shabook"),
            NavLink::new("ShaPad", "/shapad"),
            NavLink::new("ShaWear", "/shawear"),
            NavLink::new("ShaAccessories", "/accessories"),
        ],
    },
    FooterSection {
        key: FooterSectionKey::Services,
        title: "Services",
        links: &[
            NavLink::new("ShaCare+", "/shacare"),
            NavLink::new("ShaTrade", "/shatrade"),
            NavLink::new("ShaPay", "/shapay"),
        ],
    },
    FooterSection {
        key: FooterSectionKey::Sustainability,
        title: "Sustainability",
        links: &[
            NavLink::new("ShaCycle", "/shacycle"),
            NavLink::new("ShaGreen", "/shagreen"),
        ],
    },
    FooterSection {
        key: FooterSectionKey::About,
        title: "About ShaVolts",
        links: &[
            NavLink::new("ShaTeam", "/careers"),
            NavLink::new("ShaInvest", "/investors"),
            NavLink::new("ShaEthics", "/ethics"),
        ],
    },
    FooterSection {
        key: FooterSectionKey::Support,
        title: "Support",
        links: &[
            NavLink::new("ShaHelp", "/contact"),
            NavLink::new("ShaCover", "/warranty"),
            NavLink::new("ShaFix", "/repairs"),
        ],
    },
];

/// Links in the footer's bottom bar
pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink::new("Privacy Policy", "/privacy"),
    NavLink::new("Terms of Use", "/terms"),
    NavLink::new("Sales Policy", "/sales-policy"),
    NavLink::new("ShaLegal", "/legal"),
    NavLink::new("Site Map", "/sitemap"),
];

/// Look up a footer section by key
pub fn footer_section(key: FooterSectionKey) -> &'static FooterSection {
    FOOTER_SECTIONS
        .iter()
        .find(|section| section.key == key)
        .unwrap_or(&FOOTER_SECTIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_nav_covers_every_page_but_home() {
        assert_eq!(MAIN_NAV.len(), 7);
        for route in Route::ALL.into_iter().filter(|r| *r != Route::Home) {
            assert!(
                MAIN_NAV.iter().any(|link| link.route() == Some(route)),
                "no nav link for {route}"
            );
        }
    }

    #[test]
    fn test_footer_sections_follow_key_order() {
        let keys: Vec<_> = FOOTER_SECTIONS.iter().map(|s| s.key).collect();
        assert_eq!(keys, FooterSectionKey::ALL);
    }

    #[test]
    fn test_footer_link_counts() {
        assert_eq!(footer_section(FooterSectionKey::Shop).links.len(), 6);
        assert_eq!(footer_section(FooterSectionKey::Services).links.len(), 3);
        assert_eq!(footer_section(FooterSectionKey::Sustainability).links.len(), 2);
        assert_eq!(footer_section(FooterSectionKey::About).links.len(), 3);
        assert_eq!(footer_section(FooterSectionKey::Support).links.len(), 3);
    }

    #[test]
    fn test_footer_links_may_point_nowhere() {
        let services = footer_section(FooterSectionKey::Services);
        assert!(services.links.iter().all(|link| link.route().is_none()));
        assert_eq!(
            footer_section(FooterSectionKey::Shop).links[0].route(),
            Some(Route::Store)
        );
    }
}
