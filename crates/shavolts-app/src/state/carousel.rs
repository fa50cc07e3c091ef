//! Looping slide carousel

use tracing::warn;

use super::selection::Selection;
use crate::handler::{Component, UpdateResult};
use crate::message::CarouselMessage;

/// Current slide of a looping carousel; advancing past the last slide wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel<T: 'static> {
    slide: Selection<T>,
}

impl<T> Carousel<T> {
    pub fn new(slides: &'static [T]) -> Self {
        Self {
            slide: Selection::new(slides),
        }
    }

    pub fn index(&self) -> usize {
        self.slide.index()
    }

    pub fn current(&self) -> &'static T {
        self.slide.current()
    }

    pub fn len(&self) -> usize {
        self.slide.options().len()
    }

    fn step(&mut self, forward: bool) {
        let len = self.len();
        let next = if forward {
            (self.index() + 1) % len
        } else {
            (self.index() + len - 1) % len
        };
        // always in range
        let _ = self.slide.select(next);
    }
}

impl<T: std::fmt::Debug> Component for Carousel<T> {
    type Message = CarouselMessage;

    fn update(&mut self, msg: CarouselMessage) -> UpdateResult<CarouselMessage> {
        match msg {
            CarouselMessage::Tick | CarouselMessage::Next => self.step(true),
            CarouselMessage::Previous => self.step(false),
            CarouselMessage::GoTo(index) => {
                if let Err(e) = self.slide.select(index) {
                    warn!("carousel: {}", e);
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

    const SLIDES: &[&str] = &["one", "two", "three"];

    #[test]
    fn test_tick_wraps_around() {
        let mut carousel = Carousel::new(SLIDES);
        for _ in 0..3 {
            dispatch(&mut carousel, CarouselMessage::Tick);
        }
        assert_eq!(carousel.index(), 0);
        dispatch(&mut carousel, CarouselMessage::Next);
        assert_eq!(*carousel.current(), "two");
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut carousel = Carousel::new(SLIDES);
        dispatch(&mut carousel, CarouselMessage::Previous);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_goto_indicator() {
        let mut carousel = Carousel::new(SLIDES);
        dispatch(&mut carousel, CarouselMessage::GoTo(2));
        assert_eq!(*carousel.current(), "three");
        dispatch(&mut carousel, CarouselMessage::GoTo(7));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_single_slide_stays_put() {
        const ONE: &[u8] = &[1];
        let mut carousel = Carousel::new(ONE);
        dispatch(&mut carousel, CarouselMessage::Tick);
        dispatch(&mut carousel, CarouselMessage::Previous);
        assert_eq!(carousel.index(), 0);
    }
}
