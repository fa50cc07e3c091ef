//! Accessories page state: search text and browse tab

use tracing::debug;

use crate::handler::{Component, UpdateResult};
use crate::message::AccessoriesMessage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowseTab {
    #[default]
    Product,
    Category,
}

impl BrowseTab {
    pub const ALL: [BrowseTab; 2] = [BrowseTab::Product, BrowseTab::Category];

    pub fn label(self) -> &'static str {
        match self {
            BrowseTab::Product => "Browse by Product",
            BrowseTab::Category => "Browse by Category",
        }
    }
}

/// The search input is controlled but never submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessoriesState {
    pub query: String,
    pub tab: BrowseTab,
}

impl AccessoriesState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for AccessoriesState {
    type Message = AccessoriesMessage;

    fn update(&mut self, msg: AccessoriesMessage) -> UpdateResult<AccessoriesMessage> {
        match msg {
            AccessoriesMessage::SetQuery(query) => self.query = query,
            AccessoriesMessage::SelectTab(tab) => {
                debug!("accessories tab -> {:?}", tab);
                self.tab = tab;
            }
        }
        UpdateResult::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::dispatch;

    #[test]
    fn test_defaults() {
        let state = AccessoriesState::new();
        assert_eq!(state.tab, BrowseTab::Product);
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_query_is_replaced_verbatim() {
        let mut state = AccessoriesState::new();
        dispatch(&mut state, AccessoriesMessage::SetQuery("mag".into()));
        dispatch(&mut state, AccessoriesMessage::SetQuery("MagSafe ".into()));
        assert_eq!(state.query, "MagSafe ");
    }

    #[test]
    fn test_one_tab_selected() {
        let mut state = AccessoriesState::new();
        dispatch(&mut state, AccessoriesMessage::SelectTab(BrowseTab::Category));
        assert_eq!(state.tab, BrowseTab::Category);
        assert_eq!(state.tab.label(), "Browse by Category");
    }
}
