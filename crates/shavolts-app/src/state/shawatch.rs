//! ShaWatch page state

use shavolts_core::content::shawatch::SECONDARY_LINKS;
use tracing::warn;

use super::disclosure::Accordion;
use crate::handler::{Component, UpdateResult};
use crate::message::ShaWatchMessage;

/// Mobile disclosure over the secondary links, keyed by link label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaWatchState {
    pub links: Accordion<&'static str>,
}

impl ShaWatchState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for ShaWatchState {
    type Message = ShaWatchMessage;

    fn update(&mut self, msg: ShaWatchMessage) -> UpdateResult<ShaWatchMessage> {
        match msg {
            ShaWatchMessage::ToggleLink(label) => {
                if SECONDARY_LINKS.iter().any(|l| l.link.label == label) {
                    self.links.toggle(label);
                } else {
                    warn!("ShaWatch: no secondary link {:?}", label);
                }
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
    fn test_single_link_open_at_a_time() {
        let mut state = ShaWatchState::new();
        dispatch(&mut state, ShaWatchMessage::ToggleLink("Compare"));
        dispatch(&mut state, ShaWatchMessage::ToggleLink("ShaGear"));
        assert_eq!(state.links.open(), Some("ShaGear"));

        dispatch(&mut state, ShaWatchMessage::ToggleLink("ShaGear"));
        assert_eq!(state.links.open(), None);
    }

    #[test]
    fn test_unknown_label_is_ignored() {
        let mut state = ShaWatchState::new();
        dispatch(&mut state, ShaWatchMessage::ToggleLink("ShaBands"));
        assert_eq!(state.links.open(), None);
    }
}
