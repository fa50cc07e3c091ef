//! Scroll-linked motion math
//!
//! Pure functions from an element's bounding rect and the viewport height to
//! a progress value, and from progress to a CSS transform. The browser layer
//! feeds rect measurements in on every scroll event.

use std::fmt::Write;

/// Where a tracked element's edge meets a viewport edge.
///
/// Both fields are fractions: `0.0` is the top edge, `1.0` the bottom edge,
/// `0.5` the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub target: f64,
    pub viewport: f64,
}

impl ScrollOffset {
    pub const fn new(target: f64, viewport: f64) -> Self {
        Self { target, viewport }
    }

    /// Element top meets viewport top
    pub const START_START: Self = Self::new(0.0, 0.0);
    /// Element bottom meets viewport bottom
    pub const END_END: Self = Self::new(1.0, 1.0);
    /// Element bottom meets viewport top
    pub const END_START: Self = Self::new(1.0, 0.0);
    /// Element top meets viewport center
    pub const TOP_CENTER: Self = Self::new(0.0, 0.5);
    /// Element bottom meets viewport center
    pub const BOTTOM_CENTER: Self = Self::new(1.0, 0.5);
    /// Element top meets viewport bottom
    pub const TOP_BOTTOM: Self = Self::new(0.0, 1.0);
    /// Element bottom meets viewport top
    pub const BOTTOM_TOP: Self = Self::new(1.0, 0.0);
}

/// A tracked scroll span: progress is 0 at `start`, 1 at `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ScrollRange {
    pub const fn new(start: ScrollOffset, end: ScrollOffset) -> Self {
        Self { start, end }
    }

    /// ShaPhone page container
    pub const SHAPHONE: Self = Self::new(ScrollOffset::START_START, ScrollOffset::END_END);
    /// ShaBook hero section
    pub const SHABOOK_HERO: Self = Self::new(ScrollOffset::START_START, ScrollOffset::END_START);
    /// ShaBook device scrub
    pub const SHABOOK_DEVICE: Self =
        Self::new(ScrollOffset::TOP_CENTER, ScrollOffset::BOTTOM_CENTER);
    /// ShaBook video scrub
    pub const SHABOOK_VIDEO: Self = Self::new(ScrollOffset::TOP_BOTTOM, ScrollOffset::BOTTOM_TOP);

    /// Progress through the range, clamped to `[0, 1]`.
    ///
    /// `top` and `height` come from the element's bounding client rect;
    /// `viewport` is the window's inner height. A zero-length range jumps
    /// straight from 0 to 1 once the start point is passed.
    pub fn progress(&self, top: f64, height: f64, viewport: f64) -> f64 {
        let edge = |o: ScrollOffset| top + o.target * height - o.viewport * viewport;
        let start_dist = edge(self.start);
        let span = start_dist - edge(self.end);
        if span == 0.0 || !span.is_finite() {
            return if start_dist <= 0.0 { 1.0 } else { 0.0 };
        }
        (start_dist / span).clamp(0.0, 1.0)
    }
}

/// Map `value` linearly from `input` to `output`, clamping outside `input`
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if in_hi == in_lo {
        return if value < in_lo { out_lo } else { out_hi };
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// A device image's scroll-driven transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceTransform {
    pub rotate_y_deg: f64,
    pub scale: f64,
    pub translate_y_px: f64,
}

impl DeviceTransform {
    pub const IDENTITY: Self = Self {
        rotate_y_deg: 0.0,
        scale: 1.0,
        translate_y_px: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// CSS `transform` value
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let _ = write!(
            css,
            "translateY({}px) scale({}) rotateY({}deg)",
            fmt_num(self.translate_y_px),
            fmt_num(self.scale),
            fmt_num(self.rotate_y_deg)
        );
        css
    }
}

impl Default for DeviceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Up to three decimals, trailing zeros dropped
fn fmt_num(value: f64) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// ShaPhone hero device: the whole effect plays out in the first fifth of the page
pub fn shaphone_device(progress: f64, reduced_motion: bool) -> DeviceTransform {
    if reduced_motion {
        return DeviceTransform::IDENTITY;
    }
    let range = (0.0, 0.2);
    DeviceTransform {
        rotate_y_deg: interpolate(progress, range, (0.0, 5.0)),
        scale: interpolate(progress, range, (1.0, 0.95)),
        translate_y_px: interpolate(progress, range, (0.0, 50.0)),
    }
}

/// ShaBook hero device.
///
/// `hero` is progress through [`ScrollRange::SHABOOK_HERO`], `scrub` through
/// [`ScrollRange::SHABOOK_DEVICE`]; the scrub tilt adds to the hero tilt.
pub fn shabook_device(hero: f64, scrub: f64, reduced_motion: bool) -> DeviceTransform {
    if reduced_motion {
        return DeviceTransform::IDENTITY;
    }
    let range = (0.0, 1.0);
    DeviceTransform {
        rotate_y_deg: interpolate(hero, range, (0.0, 10.0)) + interpolate(scrub, range, (0.0, 5.0)),
        scale: interpolate(hero, range, (1.0, 0.95)),
        translate_y_px: interpolate(hero, range, (0.0, 100.0)),
    }
}

/// ShaBook full-bleed video: zooms in while crossing the viewport
pub fn shabook_video_scale(progress: f64, reduced_motion: bool) -> f64 {
    if reduced_motion {
        return 1.0;
    }
    interpolate(progress, (0.0, 1.0), (1.0, 1.1))
}

/// CSS `transform` value for a uniform scale
pub fn scale_css(scale: f64) -> String {
    format!("scale({})", fmt_num(scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    const VH: f64 = 800.0;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_progress_start_start_end_end() {
        let range = ScrollRange::SHAPHONE;
        // 3000px page in an 800px viewport: 2200px of travel
        assert!(close(range.progress(0.0, 3000.0, VH), 0.0));
        assert!(close(range.progress(-1100.0, 3000.0, VH), 0.5));
        assert!(close(range.progress(-2200.0, 3000.0, VH), 1.0));
    }

    #[test]
    fn test_progress_is_clamped() {
        let range = ScrollRange::SHAPHONE;
        assert_eq!(range.progress(400.0, 3000.0, VH), 0.0);
        assert_eq!(range.progress(-9000.0, 3000.0, VH), 1.0);
    }

    #[test]
    fn test_progress_end_start() {
        let range = ScrollRange::SHABOOK_HERO;
        assert!(close(range.progress(-250.0, 1000.0, VH), 0.25));
    }

    #[test]
    fn test_progress_center_scrub() {
        let range = ScrollRange::SHABOOK_DEVICE;
        // starts when the top reaches 400px, ends when the bottom does
        assert!(close(range.progress(400.0, 600.0, VH), 0.0));
        assert!(close(range.progress(100.0, 600.0, VH), 0.5));
    }

    #[test]
    fn test_scrub_progress_reads_the_untransformed_box() {
        let range = ScrollRange::SHABOOK_DEVICE;
        // layout box of the wrapper: top 100, height 600
        assert!(close(range.progress(100.0, 600.0, VH), 0.5));

        // the same box after the hero transform at p = 0.5
        // (translateY 50px, scale 0.975 about its center)
        let height = 600.0 * 0.975;
        let top = 100.0 + 50.0 + (600.0 - height) / 2.0;
        let lagging = range.progress(top, height, VH);
        assert!((lagging - 0.4145).abs() < 1e-3, "{lagging}");
    }

    #[test]
    fn test_progress_video_crossing() {
        let range = ScrollRange::SHABOOK_VIDEO;
        // 800px element: travels 1600px from entering to leaving
        assert!(close(range.progress(VH, 800.0, VH), 0.0));
        assert!(close(range.progress(0.0, 800.0, VH), 0.5));
        assert!(close(range.progress(-800.0, 800.0, VH), 1.0));
    }

    #[test]
    fn test_zero_span_jumps() {
        // element exactly viewport-tall: start start == end end
        let range = ScrollRange::SHAPHONE;
        assert_eq!(range.progress(10.0, VH, VH), 0.0);
        assert_eq!(range.progress(0.0, VH, VH), 1.0);
    }

    #[test]
    fn test_interpolate_clamps() {
        assert_eq!(interpolate(-1.0, (0.0, 0.2), (0.0, 5.0)), 0.0);
        assert!(close(interpolate(0.1, (0.0, 0.2), (0.0, 5.0)), 2.5));
        assert_eq!(interpolate(0.9, (0.0, 0.2), (0.0, 5.0)), 5.0);
        assert!(close(interpolate(0.5, (0.0, 1.0), (1.0, 0.95)), 0.975));
    }

    #[test]
    fn test_shaphone_device_saturates_at_a_fifth() {
        let t = shaphone_device(0.2, false);
        assert_eq!(t, shaphone_device(0.8, false));
        assert_snapshot!(t.to_css(), @"translateY(50px) scale(0.95) rotateY(5deg)");
    }

    #[test]
    fn test_shaphone_device_midway() {
        assert_snapshot!(
            shaphone_device(0.1, false).to_css(),
            @"translateY(25px) scale(0.975) rotateY(2.5deg)"
        );
    }

    #[test]
    fn test_shabook_device_adds_scrub_tilt() {
        let t = shabook_device(1.0, 1.0, false);
        assert!(close(t.rotate_y_deg, 15.0));
        assert_snapshot!(
            shabook_device(0.5, 0.0, false).to_css(),
            @"translateY(50px) scale(0.975) rotateY(5deg)"
        );
    }

    #[test]
    fn test_reduced_motion_is_identity() {
        for p in [0.0, 0.1, 0.5, 1.0] {
            assert!(shaphone_device(p, true).is_identity());
            assert!(shabook_device(p, p, true).is_identity());
            assert_eq!(shabook_video_scale(p, true), 1.0);
        }
        assert_snapshot!(DeviceTransform::IDENTITY.to_css(), @"translateY(0px) scale(1) rotateY(0deg)");
    }

    #[test]
    fn test_video_scale() {
        assert_snapshot!(scale_css(shabook_video_scale(1.0, false)), @"scale(1.1)");
        assert_snapshot!(scale_css(shabook_video_scale(0.0, false)), @"scale(1)");
    }
}
