//! Acceptance tests for reveal-on-scroll and the hero
//!
//! Test scenarios:
//! 1. The tagline types itself behind a cursor
//! 2. Sections stay blank until scrolled into view, then animate in once
//! 3. Reduced motion shows everything immediately
//! 4. Resizing reflows the page and keeps revealed sections revealed

use crate::config::ResolvedConfig;
use crate::model::SectionId;
use crate::test_harness::AcceptanceTestHarness;
use crate::view_state::DeviceClass;
use crossterm::event::KeyCode;

#[test]
fn tagline_types_one_character_per_tick() {
    let mut harness = AcceptanceTestHarness::new(140, 30);

    harness.advance_to_ms(300);
    assert_eq!(harness.state().typewriter().revealed(), "Dev");

    harness.advance_to_ms(600);
    assert_eq!(harness.state().typewriter().revealed(), "DevOps");
    assert!(harness.render_to_string().contains("DevOps|"));

    harness.advance_to_ms(10_000);
    assert!(harness.state().typewriter().is_complete());
    assert!(harness
        .render_to_string()
        .contains("DevOps Engineer • Cloud Architect • Infrastructure Specialist|"));
}

#[test]
fn sections_wait_for_the_viewport() {
    // GIVEN: Page at the top for a long time
    let mut harness = AcceptanceTestHarness::new(140, 30);
    harness.advance_to_ms(20_000);

    // THEN: Nothing below the hero has been revealed
    for id in SectionId::ALL.into_iter().skip(1) {
        assert!(!harness.state().section(id).has_been_visible(), "{id}");
    }

    // WHEN: User scrolls down into Skills
    harness.send_key(KeyCode::PageDown);

    // THEN: Skills starts animating from now, not from mount
    let skills = harness.state().section(SectionId::Skills);
    assert!(skills.has_been_visible());
    assert!(!skills.is_settled(harness.state().now()));

    harness.advance_ms(5_000);
    assert!(harness
        .state()
        .section(SectionId::Skills)
        .is_settled(harness.state().now()));
}

#[test]
fn revealed_sections_stay_revealed_after_scrolling_away() {
    let mut harness = AcceptanceTestHarness::new(140, 30);
    harness.send_key(KeyCode::Char('6'));
    harness.advance_ms(5_000);
    harness.send_key(KeyCode::Char('g'));

    assert!(harness.state().section(SectionId::Projects).has_been_visible());
    assert!(harness
        .state()
        .section(SectionId::Projects)
        .is_settled(harness.state().now()));
}

#[test]
fn idle_page_has_no_wakeup() {
    let mut harness = AcceptanceTestHarness::new(140, 30);
    harness.advance_to_ms(60_000);
    assert_eq!(harness.state().next_wakeup(), None);
}

#[test]
fn reduced_motion_shows_everything_at_once() {
    let config = ResolvedConfig {
        reduced_motion: true,
        ..ResolvedConfig::default()
    };
    let mut harness = AcceptanceTestHarness::with_config(&config, 140, 30);

    assert!(harness.state().typewriter().is_complete());
    assert_eq!(harness.state().next_wakeup(), None);

    harness.send_key(KeyCode::Char('2'));
    let state = harness.state();
    assert!(state.section(SectionId::Skills).is_settled(state.now()));
    assert!(harness.render_to_string().contains("Kubernetes"));
}

#[test]
fn resize_to_mobile_reflows_the_grid() {
    let mut harness = AcceptanceTestHarness::new(140, 30);
    let desktop_rows = harness.state().layout().total_rows();

    harness.resize(60, 30);

    assert_eq!(harness.state().device_class(), DeviceClass::Mobile);
    assert!(harness.state().layout().total_rows() > desktop_rows);
    assert!(harness.render_to_string().contains("≡ menu"));
}
