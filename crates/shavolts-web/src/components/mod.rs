pub mod badge;
pub mod color_picker;
pub mod disclosure;
pub mod footer;
pub mod header;
pub mod highlight;
pub mod icons;
pub mod menu;
pub mod product_card;
pub mod search_overlay;
pub mod video;
