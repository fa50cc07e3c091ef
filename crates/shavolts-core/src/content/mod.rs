//! Static page content
//!
//! One module per page. Everything here is literal display data; the web
//! crate decides how it looks and the app crate owns any state layered on top.

pub mod accessories;
pub mod home;
pub mod shabook;
pub mod shapad;
pub mod shaphone;
pub mod shawatch;
pub mod store;
pub mod support;

use crate::glyph::Glyph;

/// An icon + title + blurb block (spec panels, benefit cards, "why" grids)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
    /// Present when the whole block is a link
    pub href: Option<&'static str>,
}

impl Highlight {
    pub const fn new(glyph: Glyph, title: &'static str, description: &'static str) -> Self {
        Self {
            glyph,
            title,
            description,
            href: None,
        }
    }

    pub const fn linked(self, href: &'static str) -> Self {
        Self {
            href: Some(href),
            ..self
        }
    }
}

/// A collapsible panel's copy, identified by a key unique within its group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub id: &'static str,
    pub glyph: Glyph,
    pub title: &'static str,
    pub body: &'static str,
}

#[cfg(test)]
mod tests {
    use crate::catalog::names_are_unique;
    use insta::assert_snapshot;

    #[test]
    fn test_every_catalog_list_has_unique_names() {
        let lists = [
            super::home::NEW_ARRIVALS,
            super::store::FEATURED,
            super::shaphone::LINEUP,
            super::shabook::LINEUP,
            super::shapad::PRODUCTS,
            super::shawatch::WATCHES,
            super::accessories::PHONE_ACCESSORIES,
            super::accessories::PAD_ACCESSORIES,
        ];
        for list in lists {
            assert!(names_are_unique(list), "duplicate name in {list:?}");
        }
    }

    #[test]
    fn test_lineup_learn_more_slugs() {
        let slugs: Vec<String> = super::shaphone::LINEUP.iter().map(|p| p.slug()).collect();
        assert_snapshot!(slugs.join("\n"), @r"
        shaphone16pro
        shaphone16
        shaphone16lite
        ");
    }
}
