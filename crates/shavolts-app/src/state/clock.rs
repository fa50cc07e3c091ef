//! Live clock for the ShaWatch promo

use chrono::{NaiveTime, Timelike};

use crate::handler::{Component, UpdateResult};
use crate::message::ClockMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    time: NaiveTime,
}

impl Clock {
    pub fn new(time: NaiveTime) -> Self {
        Self { time }
    }

    /// Current local wall-clock time
    pub fn now() -> Self {
        Self::new(chrono::Local::now().time())
    }

    /// 24-hour `HH:MM:SS`, zero padded
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.time.hour(),
            self.time.minute(),
            self.time.second()
        )
    }
}

impl Component for Clock {
    type Message = ClockMessage;

    fn update(&mut self, msg: ClockMessage) -> UpdateResult<ClockMessage> {
        match msg {
            ClockMessage::Tick(time) => self.time = time,
        }
        UpdateResult::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::dispatch;
    use insta::assert_snapshot;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_snapshot!(Clock::new(at(7, 5, 9)).display(), @"07:05:09");
    }

    #[test]
    fn test_display_is_24_hour() {
        assert_snapshot!(Clock::new(at(23, 59, 0)).display(), @"23:59:00");
    }

    #[test]
    fn test_tick_replaces_time() {
        let mut clock = Clock::new(at(0, 0, 0));
        dispatch(&mut clock, ClockMessage::Tick(at(12, 30, 45)));
        assert_eq!(clock.display(), "12:30:45");
    }

    #[test]
    fn test_leap_second_renders_as_59() {
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1500).unwrap();
        assert_eq!(Clock::new(leap).display(), "23:59:59");
    }
}
