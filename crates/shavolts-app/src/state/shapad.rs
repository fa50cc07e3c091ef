//! ShaPad page state: sticky sub-nav with its own search overlay and menu

use shavolts_core::content::shapad::{anchor_id, SUB_NAV};
use tracing::{debug, warn};

use super::header::HeaderState;
use crate::handler::{Component, UpdateAction, UpdateResult};
use crate::message::{HeaderMessage, ShaPadMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaPadState {
    /// Anchor id of the highlighted sub-nav item
    pub active_section: &'static str,
    pub nav: HeaderState,
}

impl Default for ShaPadState {
    fn default() -> Self {
        Self {
            active_section: "overview",
            nav: HeaderState::new(),
        }
    }
}

impl ShaPadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == id
    }
}

impl Component for ShaPadState {
    type Message = ShaPadMessage;

    fn update(&mut self, msg: ShaPadMessage) -> UpdateResult<ShaPadMessage> {
        match msg {
            ShaPadMessage::SelectSection(id) => {
                if !SUB_NAV.iter().any(|link| anchor_id(link) == id) {
                    warn!("ShaPad: no section {:?}", id);
                    return UpdateResult::none();
                }
                debug!("shapad section -> {}", id);
                self.active_section = id;
                self.nav.menu_open = false;
                UpdateResult::action(UpdateAction::ScrollToAnchor { id })
            }
            // Menu entries are in-page anchors, not routes
            ShaPadMessage::Nav(HeaderMessage::SelectMenuLink(href)) if href.starts_with('#') => {
                self.nav.menu_open = false;
                UpdateResult::message(ShaPadMessage::SelectSection(
                    href.trim_start_matches('#'),
                ))
            }
            ShaPadMessage::Nav(inner) => self.nav.update(inner).map(ShaPadMessage::Nav),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::dispatch;

    #[test]
    fn test_overview_is_active_first() {
        let state = ShaPadState::new();
        assert!(state.is_active("overview"));
        assert!(!state.nav.search_open);
    }

    #[test]
    fn test_select_section_highlights_and_scrolls() {
        let mut state = ShaPadState::new();
        let actions = dispatch(&mut state, ShaPadMessage::SelectSection("tech-specs"));
        assert!(state.is_active("tech-specs"));
        assert_eq!(
            actions,
            vec![UpdateAction::ScrollToAnchor { id: "tech-specs" }]
        );
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let mut state = ShaPadState::new();
        let actions = dispatch(&mut state, ShaPadMessage::SelectSection("pricing"));
        assert!(actions.is_empty());
        assert!(state.is_active("overview"));
    }

    #[test]
    fn test_menu_link_closes_menu_and_selects_section() {
        let mut state = ShaPadState::new();
        dispatch(&mut state, ShaPadMessage::Nav(HeaderMessage::OpenMenu));
        assert!(state.nav.menu_open);

        let actions = dispatch(
            &mut state,
            ShaPadMessage::Nav(HeaderMessage::SelectMenuLink("#compare")),
        );
        assert!(!state.nav.menu_open);
        assert!(state.is_active("compare"));
        assert_eq!(actions, vec![UpdateAction::ScrollToAnchor { id: "compare" }]);
    }

    #[test]
    fn test_search_overlay_requests_focus() {
        let mut state = ShaPadState::new();
        let actions = dispatch(&mut state, ShaPadMessage::Nav(HeaderMessage::OpenSearch));
        assert!(state.nav.search_open);
        assert_eq!(actions, vec![UpdateAction::FocusSearchInput]);
    }
}
