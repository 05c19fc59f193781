//! Property-based tests for the view-state core.
//!
//! Tests validate:
//! 1. Device class is monotonic in width and matches the breakpoints
//! 2. Scroll progress is always within [0, 1], including degenerate regions
//! 3. A visibility gate never un-reveals
//! 4. Stagger delays strictly increase with index
//! 5. The typewriter prefix grows by exactly one character per tick

use folio::view_state::{
    AnimationSequencer, DeviceClass, ItemPhase, ScrollRegion, SequenceSpec, Span, Timestamp,
    TypewriterEngine, VisibilityGate,
};
use proptest::prelude::*;
use std::time::Duration;

fn class_rank(class: DeviceClass) -> u8 {
    match class {
        DeviceClass::Mobile => 0,
        DeviceClass::Tablet => 1,
        DeviceClass::Desktop => 2,
    }
}

// ===== Property 1: Device Class =====

proptest! {
    #[test]
    fn device_class_matches_breakpoints(width in 0.0f64..4000.0) {
        let expected = if width < 768.0 {
            DeviceClass::Mobile
        } else if width <= 1024.0 {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        };
        prop_assert_eq!(DeviceClass::from_width(width), expected);
    }

    #[test]
    fn device_class_is_monotonic_in_width(a in 0.0f64..4000.0, b in 0.0f64..4000.0) {
        let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            class_rank(DeviceClass::from_width(narrow)) <= class_rank(DeviceClass::from_width(wide))
        );
    }
}

// ===== Property 2: Scroll Progress =====

proptest! {
    #[test]
    fn progress_is_clamped(
        start in -5000.0f64..5000.0,
        end in -5000.0f64..5000.0,
        scroll in -20000.0f64..20000.0,
    ) {
        let progress = ScrollRegion::new(start, end).progress_at(scroll).get();
        prop_assert!((0.0..=1.0).contains(&progress), "progress {} out of range", progress);
    }

    #[test]
    fn degenerate_region_is_a_step(point in -5000.0f64..5000.0, scroll in -20000.0f64..20000.0) {
        let progress = ScrollRegion::new(point, point).progress_at(scroll).get();
        let expected = if scroll < point { 0.0 } else { 1.0 };
        prop_assert_eq!(progress, expected);
    }

    #[test]
    fn progress_is_monotonic_in_scroll(
        top in 0.0f64..3000.0,
        height in 1.0f64..3000.0,
        a in -1000.0f64..8000.0,
        b in -1000.0f64..8000.0,
    ) {
        let region = ScrollRegion::for_element(Span::from_top(top, height));
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(region.progress_at(low) <= region.progress_at(high));
    }
}

// ===== Property 3: Visibility Gate =====

proptest! {
    #[test]
    fn gate_reveals_once_and_never_resets(observations in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut gate = VisibilityGate::new();
        let mut reveals = 0;
        let mut seen = false;

        for (tick, intersecting) in observations.iter().enumerate() {
            let now = Timestamp::from_millis(tick as u64 * 10);
            if gate.observe(*intersecting, now).is_some() {
                reveals += 1;
            }
            seen |= *intersecting;
            prop_assert_eq!(gate.has_been_visible(), seen);
        }

        prop_assert_eq!(reveals, usize::from(seen));
    }
}

// ===== Property 4: Stagger =====

proptest! {
    #[test]
    fn stagger_delays_strictly_increase(
        count in 2usize..30,
        base in 0u64..1000,
        stagger in 1u64..500,
        duration in 1u64..2000,
    ) {
        let sequencer = AnimationSequencer::new(count, SequenceSpec::from_millis(base, stagger, duration));
        for index in 1..count {
            prop_assert!(sequencer.effective_delay(index) > sequencer.effective_delay(index - 1));
            prop_assert_eq!(
                sequencer.effective_delay(index),
                Duration::from_millis(base + index as u64 * stagger)
            );
        }
    }

    #[test]
    fn earlier_items_are_never_behind_later_items(
        count in 1usize..20,
        stagger in 0u64..300,
        duration in 1u64..1000,
        at in 0u64..10_000,
    ) {
        let mut sequencer = AnimationSequencer::new(count, SequenceSpec::from_millis(0, stagger, duration));
        sequencer.start(Timestamp::ZERO);
        let phases = sequencer.phases(Timestamp::from_millis(at));
        for pair in phases.windows(2) {
            prop_assert!(pair[0].progress() >= pair[1].progress());
        }
    }

    #[test]
    fn unstarted_sequencer_is_pending(count in 0usize..20, at in 0u64..10_000) {
        let sequencer = AnimationSequencer::new(count, SequenceSpec::from_millis(0, 100, 600));
        for phase in sequencer.phases(Timestamp::from_millis(at)) {
            prop_assert_eq!(phase, ItemPhase::Pending);
        }
    }
}

// ===== Property 5: Typewriter =====

proptest! {
    #[test]
    fn typewriter_reveals_one_char_per_tick(source in "\\PC{0,40}") {
        let mut engine = TypewriterEngine::new(source.clone(), Duration::from_millis(100));
        let total = source.chars().count();

        for expected in 1..=total {
            prop_assert!(engine.tick());
            prop_assert_eq!(engine.revealed_count(), expected);
            prop_assert!(source.starts_with(engine.revealed()));
        }

        prop_assert!(engine.is_complete());
        prop_assert!(!engine.tick());
        prop_assert_eq!(engine.revealed(), source.as_str());
    }
}
