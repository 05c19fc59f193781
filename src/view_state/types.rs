//! Core view-state newtypes

use std::time::Duration;

/// Point on the scheduler clock, measured from the clock origin.
///
/// The origin is whatever moment the owning `Scheduler` was created. The shell
/// maps wall-clock `Instant`s onto this axis; tests drive it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// The clock origin.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Create a timestamp `elapsed` after the origin.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self(elapsed)
    }

    /// Create a timestamp from whole milliseconds after the origin.
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Time elapsed since the origin.
    pub fn elapsed(&self) -> Duration {
        self.0
    }

    /// Add a delay, saturating at the end of the clock.
    pub fn saturating_add(&self, delay: Duration) -> Self {
        Self(self.0.saturating_add(delay))
    }

    /// Time since `earlier`, or zero if `earlier` is later than `self`.
    pub fn saturating_since(&self, earlier: Timestamp) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

/// Viewport size in CSS-like pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ViewportSize {
    /// Create a new viewport size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pointer position in viewport pixel coordinates.
///
/// Only drives ephemeral cursor-following visuals; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl PointerPosition {
    /// Create a new pointer position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Coarse viewport-size category driving layout and animation branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Narrow viewports (phones).
    Mobile,
    /// Mid-size viewports.
    Tablet,
    /// Everything wider than a tablet.
    Desktop,
}

impl DeviceClass {
    /// Classify a width against the given breakpoints.
    ///
    /// `width < mobile_below` is Mobile, `width <= tablet_max` is Tablet,
    /// anything wider is Desktop. NaN classifies as Mobile.
    pub fn classify(width: f64, breakpoints: Breakpoints) -> Self {
        if !(width >= breakpoints.mobile_below) {
            DeviceClass::Mobile
        } else if width <= breakpoints.tablet_max {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// Classify with the default 768 / 1024 breakpoints.
    pub fn from_width(width: f64) -> Self {
        Self::classify(width, Breakpoints::default())
    }

    /// Whether this is the mobile class.
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// Width thresholds separating device classes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Widths strictly below this are Mobile.
    pub mobile_below: f64,
    /// Widths up to and including this are Tablet.
    pub tablet_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_below: 768.0,
            tablet_max: 1024.0,
        }
    }
}

/// Half-open vertical span `[start, end)` in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Top edge.
    pub start: f64,
    /// Bottom edge (exclusive).
    pub end: f64,
}

impl Span {
    /// Create a span from its edges.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Create a span from a top edge and a height.
    pub fn from_top(start: f64, height: f64) -> Self {
        Self {
            start,
            end: start + height,
        }
    }

    /// Height of the span, zero if inverted.
    pub fn height(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod device_class {
        use super::*;

        #[test]
        fn below_768_is_mobile() {
            assert_eq!(DeviceClass::from_width(0.0), DeviceClass::Mobile);
            assert_eq!(DeviceClass::from_width(767.9), DeviceClass::Mobile);
        }

        #[test]
        fn boundaries_are_tablet() {
            assert_eq!(DeviceClass::from_width(768.0), DeviceClass::Tablet);
            assert_eq!(DeviceClass::from_width(1024.0), DeviceClass::Tablet);
        }

        #[test]
        fn above_1024_is_desktop() {
            assert_eq!(DeviceClass::from_width(1024.5), DeviceClass::Desktop);
            assert_eq!(DeviceClass::from_width(1920.0), DeviceClass::Desktop);
        }

        #[test]
        fn nan_width_is_mobile() {
            assert_eq!(DeviceClass::from_width(f64::NAN), DeviceClass::Mobile);
        }

        #[test]
        fn custom_breakpoints_are_respected() {
            let bp = Breakpoints {
                mobile_below: 600.0,
                tablet_max: 900.0,
            };
            assert_eq!(DeviceClass::classify(650.0, bp), DeviceClass::Tablet);
            assert_eq!(DeviceClass::classify(901.0, bp), DeviceClass::Desktop);
        }
    }

    mod timestamp {
        use super::*;

        #[test]
        fn saturating_since_never_goes_negative() {
            let early = Timestamp::from_millis(100);
            let late = Timestamp::from_millis(250);
            assert_eq!(late.saturating_since(early), Duration::from_millis(150));
            assert_eq!(early.saturating_since(late), Duration::ZERO);
        }
    }

    #[test]
    fn span_height_clamps_inverted_spans() {
        assert_eq!(Span::new(10.0, 4.0).height(), 0.0);
        assert_eq!(Span::from_top(10.0, 4.0).end, 14.0);
    }
}
