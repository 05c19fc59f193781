//! Normalized scroll progress through a bounded region.
//!
//! Progress is `clamp((scroll - start) / (end - start), 0, 1)`. It feeds
//! parallax-style translations; see [`ParallaxRange`].

use super::signal::{Observable, ReadSignal};
use super::types::{DeviceClass, Span};
use tracing::debug;

/// Region whose scroll progress is tracked, in document pixels.
///
/// `start_offset` is the scroll position at which progress is 0 and
/// `end_offset` the one at which it reaches 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    /// Scroll position mapping to progress 0.
    pub start_offset: f64,
    /// Scroll position mapping to progress 1.
    pub end_offset: f64,
}

impl ScrollRegion {
    /// Create a region from its offsets.
    pub fn new(start_offset: f64, end_offset: f64) -> Self {
        Self {
            start_offset,
            end_offset,
        }
    }

    /// Region for an element, tracked from "its top at the viewport top" to
    /// "its bottom at the viewport top".
    pub fn for_element(element: Span) -> Self {
        Self::new(element.start, element.end)
    }

    /// Progress of `scroll` through the region.
    pub fn progress_at(&self, scroll: f64) -> ScrollProgress {
        if !scroll.is_finite() {
            return ScrollProgress::START;
        }

        let length = self.end_offset - self.start_offset;
        if length.abs() <= f64::EPSILON || !length.is_finite() {
            // Degenerate single point: before it is 0, at or past it is 1.
            return if scroll < self.start_offset {
                ScrollProgress::START
            } else {
                ScrollProgress::END
            };
        }

        ScrollProgress::new((scroll - self.start_offset) / length)
    }
}

/// Scroll progress, always within `[0, 1]` and never NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// Region not yet entered.
    pub const START: Self = Self(0.0);
    /// Region fully scrolled past.
    pub const END: Self = Self(1.0);

    /// Clamp a raw ratio into a progress value. NaN becomes 0.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            Self::START
        } else {
            Self(raw.clamp(0.0, 1.0))
        }
    }

    /// Raw value in `[0, 1]`.
    pub fn get(&self) -> f64 {
        self.0
    }
}

/// Linear mapping of progress into a translation fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxRange {
    /// Translation at progress 0.
    pub from: f64,
    /// Translation at progress 1.
    pub to: f64,
}

impl ParallaxRange {
    /// Background layer: 0% → 50%.
    pub const BACKGROUND: Self = Self { from: 0.0, to: 0.5 };

    /// Foreground text layer. Mobile caps at 50%, everything else at 100%.
    pub fn foreground(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Mobile => Self { from: 0.0, to: 0.5 },
            DeviceClass::Tablet | DeviceClass::Desktop => Self { from: 0.0, to: 1.0 },
        }
    }

    /// Interpolate at `progress`.
    pub fn interpolate(&self, progress: ScrollProgress) -> f64 {
        self.from + (self.to - self.from) * progress.get()
    }
}

/// Recomputes [`ScrollProgress`] for one region on every scroll signal.
///
/// The region is captured at construction and only changes through
/// [`ScrollProgressTracker::remeasure`].
#[derive(Debug)]
pub struct ScrollProgressTracker {
    region: ScrollRegion,
    last_scroll: f64,
    progress: Observable<ScrollProgress>,
}

impl ScrollProgressTracker {
    /// Start tracking `region` at scroll position `scroll`.
    pub fn new(region: ScrollRegion, scroll: f64) -> Self {
        Self {
            region,
            last_scroll: scroll,
            progress: Observable::new(region.progress_at(scroll)),
        }
    }

    /// Handle a scroll signal.
    pub fn on_scroll(&mut self, scroll: f64) -> ScrollProgress {
        self.last_scroll = scroll;
        let progress = self.region.progress_at(scroll);
        self.progress.set(progress);
        progress
    }

    /// Replace the tracked region and recompute at the last scroll position.
    pub fn remeasure(&mut self, region: ScrollRegion) -> ScrollProgress {
        debug!(?region, "scroll region remeasured");
        self.region = region;
        self.on_scroll(self.last_scroll)
    }

    /// Currently tracked region.
    pub fn region(&self) -> ScrollRegion {
        self.region
    }

    /// Latest progress.
    pub fn progress(&self) -> ScrollProgress {
        self.progress.get()
    }

    /// Read-only progress for consumers.
    pub fn progress_signal(&self) -> ReadSignal<ScrollProgress> {
        self.progress.reader()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_linear_inside_region() {
        let region = ScrollRegion::new(100.0, 300.0);
        assert_eq!(region.progress_at(100.0).get(), 0.0);
        assert_eq!(region.progress_at(200.0).get(), 0.5);
        assert_eq!(region.progress_at(300.0).get(), 1.0);
    }

    #[test]
    fn progress_clamps_outside_region() {
        let region = ScrollRegion::new(100.0, 300.0);
        assert_eq!(region.progress_at(-50.0), ScrollProgress::START);
        assert_eq!(region.progress_at(10_000.0), ScrollProgress::END);
    }

    #[test]
    fn degenerate_region_is_a_step() {
        let region = ScrollRegion::new(200.0, 200.0);
        assert_eq!(region.progress_at(199.0), ScrollProgress::START);
        assert_eq!(region.progress_at(200.0), ScrollProgress::END);
        assert_eq!(region.progress_at(201.0), ScrollProgress::END);
    }

    #[test]
    fn non_finite_scroll_is_start() {
        let region = ScrollRegion::new(0.0, 100.0);
        assert_eq!(region.progress_at(f64::NAN), ScrollProgress::START);
        assert_eq!(region.progress_at(f64::INFINITY), ScrollProgress::START);
    }

    #[test]
    fn foreground_range_depends_on_device() {
        let half = ScrollProgress::new(0.5);
        assert_eq!(ParallaxRange::foreground(DeviceClass::Mobile).interpolate(half), 0.25);
        assert_eq!(ParallaxRange::foreground(DeviceClass::Tablet).interpolate(half), 0.5);
        assert_eq!(ParallaxRange::foreground(DeviceClass::Desktop).interpolate(half), 0.5);
        assert_eq!(ParallaxRange::BACKGROUND.interpolate(ScrollProgress::END), 0.5);
    }

    #[test]
    fn tracker_broadcasts_progress() {
        let mut tracker = ScrollProgressTracker::new(ScrollRegion::new(0.0, 400.0), 0.0);
        let reader = tracker.progress_signal();

        tracker.on_scroll(100.0);

        assert_eq!(reader.get().get(), 0.25);
    }

    #[test]
    fn region_is_not_remeasured_implicitly() {
        let mut tracker = ScrollProgressTracker::new(ScrollRegion::new(0.0, 400.0), 0.0);
        tracker.on_scroll(200.0);
        assert_eq!(tracker.region(), ScrollRegion::new(0.0, 400.0));

        let progress = tracker.remeasure(ScrollRegion::new(0.0, 800.0));

        assert_eq!(progress.get(), 0.25);
    }
}
