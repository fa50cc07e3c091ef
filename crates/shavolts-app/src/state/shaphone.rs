//! ShaPhone page state: color, storage, ShaCare+ and the disclosure group

use shavolts_core::catalog::{format_price, ColorOption, StorageOption};
use shavolts_core::content::shaphone::{COLORS, MOBILE_SPECS_PANEL, STORAGE, WHY_PANELS};
use tracing::{debug, warn};

use super::disclosure::Accordion;
use super::selection::Selection;
use crate::handler::{Component, UpdateResult};
use crate::message::ShaPhoneMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaPhoneState {
    pub color: Selection<ColorOption>,
    pub storage: Selection<StorageOption>,
    pub sha_care: bool,
    /// Mobile specs and the "Why ShaVolts" panels share one group
    pub panels: Accordion<&'static str>,
}

impl Default for ShaPhoneState {
    fn default() -> Self {
        Self {
            color: Selection::new(COLORS),
            storage: Selection::new(STORAGE),
            sha_care: false,
            panels: Accordion::new(),
        }
    }
}

impl ShaPhoneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hero image for the selected color
    pub fn hero_image(&self) -> Option<&'static str> {
        self.color.current().image
    }

    pub fn price(&self) -> u32 {
        self.storage.current().price
    }

    /// Closing call-to-action line, e.g. `Starting from $1099 with ShaCare+`
    pub fn cta_text(&self) -> String {
        let mut text = format!("Starting from {}", format_price(self.price()));
        if self.sha_care {
            text.push_str(" with ShaCare+");
        }
        text
    }

    fn is_known_panel(id: &str) -> bool {
        id == MOBILE_SPECS_PANEL || WHY_PANELS.iter().any(|panel| panel.id == id)
    }
}

impl Component for ShaPhoneState {
    type Message = ShaPhoneMessage;

    fn update(&mut self, msg: ShaPhoneMessage) -> UpdateResult<ShaPhoneMessage> {
        debug!("shaphone: {:?}", msg);
        match msg {
            ShaPhoneMessage::SelectColor(index) => {
                if let Err(e) = self.color.select(index) {
                    warn!("ShaPhone color: {}", e);
                }
            }
            ShaPhoneMessage::SelectStorage(index) => {
                if let Err(e) = self.storage.select(index) {
                    warn!("ShaPhone storage: {}", e);
                }
            }
            ShaPhoneMessage::ToggleShaCare => self.sha_care = !self.sha_care,
            ShaPhoneMessage::TogglePanel(id) if Self::is_known_panel(id) => self.panels.toggle(id),
            ShaPhoneMessage::TogglePanel(id) => warn!("ShaPhone: no panel named {:?}", id),
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
        let state = ShaPhoneState::new();
        assert_eq!(state.color.current().name, "Electric Blue");
        assert_eq!(state.storage.current().size, "128GB");
        assert!(!state.sha_care);
        assert_eq!(state.cta_text(), "Starting from $999");
    }

    #[test]
    fn test_storage_changes_price() {
        let mut state = ShaPhoneState::new();
        dispatch(&mut state, ShaPhoneMessage::SelectStorage(1));
        assert_eq!(state.price(), 1099);
        dispatch(&mut state, ShaPhoneMessage::SelectStorage(3));
        assert_eq!(state.cta_text(), "Starting from $1499");
    }

    #[test]
    fn test_sha_care_suffix() {
        let mut state = ShaPhoneState::new();
        dispatch(&mut state, ShaPhoneMessage::ToggleShaCare);
        assert_eq!(state.cta_text(), "Starting from $999 with ShaCare+");
        dispatch(&mut state, ShaPhoneMessage::ToggleShaCare);
        assert_eq!(state.cta_text(), "Starting from $999");
    }

    #[test]
    fn test_color_swaps_hero_image() {
        let mut state = ShaPhoneState::new();
        dispatch(&mut state, ShaPhoneMessage::SelectColor(1));
        assert_eq!(state.color.current().name, "Storm Gray");
        assert_eq!(state.hero_image(), COLORS[1].image);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut state = ShaPhoneState::new();
        dispatch(&mut state, ShaPhoneMessage::SelectStorage(2));
        dispatch(&mut state, ShaPhoneMessage::SelectStorage(STORAGE.len()));
        dispatch(&mut state, ShaPhoneMessage::SelectColor(99));
        assert_eq!(state.storage.index(), 2);
        assert_eq!(state.color.index(), 0);
    }

    #[test]
    fn test_panels_share_one_group() {
        let mut state = ShaPhoneState::new();
        dispatch(&mut state, ShaPhoneMessage::TogglePanel("specs"));
        dispatch(&mut state, ShaPhoneMessage::TogglePanel("shacare"));
        assert!(state.panels.is_open("shacare"));
        assert!(!state.panels.is_open("specs"));

        dispatch(&mut state, ShaPhoneMessage::TogglePanel("shacare"));
        assert_eq!(state.panels.open(), None);
    }

    #[test]
    fn test_unknown_panel_is_ignored() {
        let mut state = ShaPhoneState::new();
        dispatch(&mut state, ShaPhoneMessage::TogglePanel("warranty"));
        assert_eq!(state.panels.open(), None);
    }
}
