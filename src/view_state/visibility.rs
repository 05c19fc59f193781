//! One-shot visibility gate.

use super::types::{Span, Timestamp};

/// Proof that a gate fired. Returned exactly once per gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revealed {
    /// When the region first intersected the viewport.
    pub at: Timestamp,
}

/// Latches "has been visible" the first time a region intersects the viewport.
///
/// Once set the latch never resets for the gate's lifetime, even if the
/// region scrolls back out of view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityGate {
    revealed_at: Option<Timestamp>,
}

impl VisibilityGate {
    /// A gate that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an intersection observation.
    ///
    /// Returns `Some` only on the first observation with `intersecting`
    /// true. Every later call is a no-op.
    pub fn observe(&mut self, intersecting: bool, now: Timestamp) -> Option<Revealed> {
        if self.revealed_at.is_some() || !intersecting {
            return None;
        }
        self.revealed_at = Some(now);
        Some(Revealed { at: now })
    }

    /// Whether the region has ever been visible.
    pub fn has_been_visible(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// When the gate fired.
    pub fn revealed_at(&self) -> Option<Timestamp> {
        self.revealed_at
    }
}

/// Whether `region` and `viewport` overlap by any amount.
///
/// Both spans are half-open; a zero-height region counts as intersecting
/// when its position lies inside the viewport.
pub fn intersects(region: Span, viewport: Span) -> bool {
    if region.height() == 0.0 {
        return region.start >= viewport.start && region.start < viewport.end;
    }
    region.start < viewport.end && viewport.start < region.end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_first_intersection() {
        let mut gate = VisibilityGate::new();
        let now = Timestamp::from_millis(5);

        assert_eq!(gate.observe(false, now), None);
        assert_eq!(gate.observe(true, now), Some(Revealed { at: now }));
        assert_eq!(gate.observe(true, Timestamp::from_millis(10)), None);
    }

    #[test]
    fn latch_survives_leaving_viewport() {
        let mut gate = VisibilityGate::new();
        gate.observe(true, Timestamp::ZERO);
        gate.observe(false, Timestamp::from_millis(100));

        assert!(gate.has_been_visible());
        assert_eq!(gate.revealed_at(), Some(Timestamp::ZERO));
    }

    #[test]
    fn intersection_is_half_open() {
        let viewport = Span::new(0.0, 100.0);
        assert!(intersects(Span::new(50.0, 150.0), viewport));
        assert!(!intersects(Span::new(100.0, 150.0), viewport));
        assert!(!intersects(Span::new(-50.0, 0.0), viewport));
    }

    #[test]
    fn zero_height_region_intersects_when_inside() {
        let viewport = Span::new(0.0, 100.0);
        assert!(intersects(Span::new(40.0, 40.0), viewport));
        assert!(!intersects(Span::new(100.0, 100.0), viewport));
    }
}
