//! Header shell state

use tracing::debug;

use crate::handler::{Component, UpdateAction, UpdateResult};
use crate::message::HeaderMessage;

/// Search overlay and mobile menu flags. Both start closed and are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub search_open: bool,
    pub menu_open: bool,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for HeaderState {
    type Message = HeaderMessage;

    fn update(&mut self, msg: HeaderMessage) -> UpdateResult<HeaderMessage> {
        debug!("header: {:?}", msg);
        match msg {
            HeaderMessage::OpenSearch => {
                self.search_open = true;
                UpdateResult::action(UpdateAction::FocusSearchInput)
            }
            HeaderMessage::CloseSearch => {
                self.search_open = false;
                UpdateResult::none()
            }
            HeaderMessage::OpenMenu => {
                self.menu_open = true;
                UpdateResult::none()
            }
            HeaderMessage::CloseMenu => {
                self.menu_open = false;
                UpdateResult::none()
            }
            HeaderMessage::SelectMenuLink(href) => {
                self.menu_open = false;
                UpdateResult::action(UpdateAction::Navigate { href })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::dispatch;

    #[test]
    fn test_starts_closed() {
        let state = HeaderState::new();
        assert!(!state.search_open);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_open_search_requests_focus() {
        let mut state = HeaderState::new();
        let actions = dispatch(&mut state, HeaderMessage::OpenSearch);
        assert!(state.search_open);
        assert_eq!(actions, vec![UpdateAction::FocusSearchInput]);

        dispatch(&mut state, HeaderMessage::CloseSearch);
        assert!(!state.search_open);
    }

    #[test]
    fn test_search_and_menu_are_independent() {
        let mut state = HeaderState::new();
        dispatch(&mut state, HeaderMessage::OpenMenu);
        dispatch(&mut state, HeaderMessage::OpenSearch);
        assert!(state.menu_open && state.search_open);

        dispatch(&mut state, HeaderMessage::CloseMenu);
        assert!(!state.menu_open);
        assert!(state.search_open);
    }

    #[test]
    fn test_menu_link_closes_and_navigates() {
        let mut state = HeaderState::new();
        dispatch(&mut state, HeaderMessage::OpenMenu);
        let actions = dispatch(&mut state, HeaderMessage::SelectMenuLink("/shabook"));
        assert!(!state.menu_open);
        assert_eq!(actions, vec![UpdateAction::Navigate { href: "/shabook" }]);
    }
}
