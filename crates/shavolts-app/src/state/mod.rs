//! Page-local UI state
//!
//! Every struct here is created with defaults when its component mounts and
//! dropped when it unmounts. Nothing is shared between pages.

pub mod accessories;
pub mod carousel;
pub mod clock;
pub mod disclosure;
pub mod footer;
pub mod header;
pub mod selection;
pub mod shabook;
pub mod shapad;
pub mod shaphone;
pub mod shawatch;

pub use accessories::{AccessoriesState, BrowseTab};
pub use carousel::Carousel;
pub use clock::Clock;
pub use disclosure::{Accordion, ExpandedSet};
pub use footer::FooterState;
pub use header::HeaderState;
pub use selection::Selection;
pub use shabook::ShaBookState;
pub use shapad::ShaPadState;
pub use shaphone::ShaPhoneState;
pub use shawatch::ShaWatchState;
