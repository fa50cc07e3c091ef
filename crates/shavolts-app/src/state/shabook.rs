//! ShaBook page state

use shavolts_core::catalog::ColorOption;
use shavolts_core::content::shabook::COLORS;
use tracing::warn;

use super::selection::Selection;
use crate::handler::{Component, UpdateResult};
use crate::message::ShaBookMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaBookState {
    pub color: Selection<ColorOption>,
}

impl Default for ShaBookState {
    fn default() -> Self {
        Self {
            color: Selection::new(COLORS),
        }
    }
}

impl ShaBookState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hero_image(&self) -> Option<&'static str> {
        self.color.current().image
    }
}

impl Component for ShaBookState {
    type Message = ShaBookMessage;

    fn update(&mut self, msg: ShaBookMessage) -> UpdateResult<ShaBookMessage> {
        match msg {
            ShaBookMessage::SelectColor(index) => {
                if let Err(e) = self.color.select(index) {
                    warn!("ShaBook color: {}", e);
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
    fn test_default_is_storm_gray() {
        let state = ShaBookState::new();
        assert_eq!(state.color.current().name, "Storm Gray");
        assert_eq!(state.hero_image(), COLORS[0].image);
    }

    #[test]
    fn test_select_color() {
        let mut state = ShaBookState::new();
        dispatch(&mut state, ShaBookMessage::SelectColor(2));
        assert_eq!(state.color.current().name, "Matte Black");
        dispatch(&mut state, ShaBookMessage::SelectColor(3));
        assert_eq!(state.color.current().name, "Matte Black");
    }
}
