//! Footer shell state

use shavolts_core::FooterSectionKey;
use tracing::debug;

use super::disclosure::ExpandedSet;
use crate::handler::{Component, UpdateResult};
use crate::message::FooterMessage;

/// Which footer columns are expanded on narrow viewports. Starts all collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterState {
    expanded: ExpandedSet<FooterSectionKey>,
}

impl FooterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: FooterSectionKey) -> bool {
        self.expanded.is_expanded(key)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.count()
    }
}

impl Component for FooterState {
    type Message = FooterMessage;

    fn update(&mut self, msg: FooterMessage) -> UpdateResult<FooterMessage> {
        match msg {
            FooterMessage::ToggleSection(key) => {
                self.expanded.toggle(key);
                debug!("footer section {} expanded={}", key, self.is_expanded(key));
                UpdateResult::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::dispatch;

    #[test]
    fn test_starts_collapsed() {
        let state = FooterState::new();
        for key in FooterSectionKey::ALL {
            assert!(!state.is_expanded(key));
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        for key in FooterSectionKey::ALL {
            let mut state = FooterState::new();
            dispatch(&mut state, FooterMessage::ToggleSection(key));
            assert!(state.is_expanded(key));
            dispatch(&mut state, FooterMessage::ToggleSection(key));
            assert!(!state.is_expanded(key));
        }
    }

    #[test]
    fn test_toggle_leaves_other_sections_alone() {
        for k1 in FooterSectionKey::ALL {
            for k2 in FooterSectionKey::ALL.into_iter().filter(|k| *k != k1) {
                let mut state = FooterState::new();
                dispatch(&mut state, FooterMessage::ToggleSection(k2));
                dispatch(&mut state, FooterMessage::ToggleSection(k1));
                assert!(state.is_expanded(k2), "toggling {k1} changed {k2}");
            }
        }
    }
}
