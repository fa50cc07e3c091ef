//! Icon identifiers referenced by content records
//!
//! Content stays free of any rendering concern; the web crate maps each
//! glyph to an SVG.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    ArrowLeftRight,
    Battery,
    Bolt,
    Camera,
    Clock,
    Cpu,
    CreditCard,
    Crown,
    Gamepad,
    Laptop,
    Monitor,
    Palette,
    Recycle,
    Shield,
    Smartphone,
    Tablet,
    Truck,
    Video,
    Watch,
}
