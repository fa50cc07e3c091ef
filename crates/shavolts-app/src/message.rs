//! Message types for the TEA pattern
//!
//! Each stateful component has its own message enum. Messages carry only
//! plain data: option indices, panel ids, static hrefs.

use chrono::NaiveTime;
use shavolts_core::FooterSectionKey;

use crate::state::accessories::BrowseTab;

/// Header shell: search overlay and mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMessage {
    OpenSearch,
    CloseSearch,
    OpenMenu,
    CloseMenu,
    /// A link in the mobile menu was chosen
    SelectMenuLink(&'static str),
}

/// Footer shell: per-section collapse on narrow viewports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMessage {
    ToggleSection(FooterSectionKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaPhoneMessage {
    SelectColor(usize),
    SelectStorage(usize),
    ToggleShaCare,
    /// Toggle a panel of the page's single disclosure group
    TogglePanel(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaBookMessage {
    SelectColor(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaPadMessage {
    /// Sub-nav item chosen, by anchor id
    SelectSection(&'static str),
    /// The sub-nav carries its own search overlay and mobile menu
    Nav(HeaderMessage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaWatchMessage {
    /// Toggle a secondary link row of the mobile disclosure, by label
    ToggleLink(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessoriesMessage {
    SetQuery(String),
    SelectTab(BrowseTab),
}

/// Store hero carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMessage {
    /// Autoplay timer fired
    Tick,
    Next,
    Previous,
    /// Indicator dot clicked
    GoTo(usize),
}

/// ShaWatch promo clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMessage {
    Tick(NaiveTime),
}
