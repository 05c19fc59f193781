//! Staggered entrance animations.
//!
//! An [`AnimationSequencer`] drives one ordered group of items (cards in a
//! grid, rows in a timeline). Nothing starts until the enclosing section's
//! [`VisibilityGate`](super::visibility::VisibilityGate) fires; from that
//! moment item `i` waits `base_delay + i * stagger`, animates for
//! `duration`, then settles for good.
//!
//! Phases are a pure function of the start time and the clock, so the
//! sequencer owns no timers. The shell asks [`AnimationSequencer::next_transition`]
//! to know when to redraw.

use super::types::Timestamp;
use std::time::Duration;

/// Timing of one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceSpec {
    /// Delay before item 0 starts.
    pub base_delay: Duration,
    /// Extra delay per index.
    pub stagger: Duration,
    /// How long each item animates.
    pub duration: Duration,
}

impl SequenceSpec {
    /// Build timings from millisecond values.
    pub const fn from_millis(base_delay: u64, stagger: u64, duration: u64) -> Self {
        Self {
            base_delay: Duration::from_millis(base_delay),
            stagger: Duration::from_millis(stagger),
            duration: Duration::from_millis(duration),
        }
    }

    /// Everything settles the moment the sequence starts.
    pub const fn instant() -> Self {
        Self::from_millis(0, 0, 0)
    }
}

/// Addressable item of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceItem {
    /// Position in the group.
    pub index: usize,
    /// Delay before item 0 starts.
    pub base_delay: Duration,
    /// Extra delay per index.
    pub stagger_interval: Duration,
}

impl SequenceItem {
    /// `base_delay + index * stagger_interval`.
    pub fn effective_delay(&self) -> Duration {
        let steps = u32::try_from(self.index).unwrap_or(u32::MAX);
        self.base_delay
            .saturating_add(self.stagger_interval.saturating_mul(steps))
    }
}

/// Lifecycle of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemPhase {
    /// Not started (section unseen or delay not yet elapsed). Rendered hidden.
    Pending,
    /// Mid-transition; `progress` is in `[0, 1)`.
    Animating {
        /// Linear progress through the animation.
        progress: f64,
    },
    /// Finished. Terminal.
    Settled,
}

impl ItemPhase {
    /// Progress in `[0, 1]`: 0 when pending, 1 when settled.
    pub fn progress(&self) -> f64 {
        match self {
            ItemPhase::Pending => 0.0,
            ItemPhase::Animating { progress } => *progress,
            ItemPhase::Settled => 1.0,
        }
    }

    /// Ease-out cubic of [`ItemPhase::progress`], for decelerating slides.
    pub fn eased(&self) -> f64 {
        let t = self.progress();
        1.0 - (1.0 - t).powi(3)
    }

    /// Whether anything should be drawn yet.
    pub fn is_visible(&self) -> bool {
        !matches!(self, ItemPhase::Pending)
    }
}

/// Staggered phase computation for an ordered group of items.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSequencer {
    item_count: usize,
    spec: SequenceSpec,
    started_at: Option<Timestamp>,
}

impl AnimationSequencer {
    /// Create an idle sequencer for `item_count` items.
    pub fn new(item_count: usize, spec: SequenceSpec) -> Self {
        Self {
            item_count,
            spec,
            started_at: None,
        }
    }

    /// Number of items in the group.
    pub fn len(&self) -> usize {
        self.item_count
    }

    /// Whether the group has no items.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Timing of this sequence.
    pub fn spec(&self) -> SequenceSpec {
        self.spec
    }

    /// The item at `index`.
    pub fn item(&self, index: usize) -> SequenceItem {
        SequenceItem {
            index,
            base_delay: self.spec.base_delay,
            stagger_interval: self.spec.stagger,
        }
    }

    /// Delay from start until item `index` begins animating.
    pub fn effective_delay(&self, index: usize) -> Duration {
        self.item(index).effective_delay()
    }

    /// Start the sequence. Returns false if it was already started.
    ///
    /// Call only once the enclosing section has been revealed.
    pub fn start(&mut self, now: Timestamp) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Whether [`AnimationSequencer::start`] has been called.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Phase of item `index` at `now`. Out-of-range indices stay pending.
    pub fn phase(&self, index: usize, now: Timestamp) -> ItemPhase {
        let Some(started_at) = self.started_at else {
            return ItemPhase::Pending;
        };
        if index >= self.item_count {
            return ItemPhase::Pending;
        }

        let begins = started_at.saturating_add(self.effective_delay(index));
        if now < begins {
            return ItemPhase::Pending;
        }

        let elapsed = now.saturating_since(begins);
        if elapsed >= self.spec.duration {
            return ItemPhase::Settled;
        }

        ItemPhase::Animating {
            progress: elapsed.as_secs_f64() / self.spec.duration.as_secs_f64(),
        }
    }

    /// Phases of every item at `now`, in index order.
    pub fn phases(&self, now: Timestamp) -> Vec<ItemPhase> {
        (0..self.item_count)
            .map(|index| self.phase(index, now))
            .collect()
    }

    /// Whether every item has settled. An empty group settles on start.
    pub fn is_settled(&self, now: Timestamp) -> bool {
        if !self.is_started() {
            return false;
        }
        match self.item_count.checked_sub(1) {
            None => true,
            // The last item has the largest delay, so it settles last.
            Some(last) => self.phase(last, now) == ItemPhase::Settled,
        }
    }

    /// Earliest moment after `now` at which some item changes phase.
    ///
    /// `None` when the sequence is not started or already settled. While an
    /// item is animating every instant is a change, so `now` itself is
    /// returned; callers redraw at their frame rate.
    pub fn next_transition(&self, now: Timestamp) -> Option<Timestamp> {
        let started_at = self.started_at?;
        let mut earliest: Option<Timestamp> = None;

        for index in 0..self.item_count {
            let begins = started_at.saturating_add(self.effective_delay(index));
            let ends = begins.saturating_add(self.spec.duration);
            let candidate = if now < begins {
                begins
            } else if now < ends {
                return Some(now);
            } else {
                continue;
            };
            earliest = Some(earliest.map_or(candidate, |e| e.min(candidate)));
        }

        earliest
    }
}
