//! Property-based tests for Section Tracker invariants.
//!
//! For arbitrary layouts and scroll sequences the active section is always
//! the first listed section containing `scroll_y + lookahead`, or the value
//! held before the event when nothing contains it.

use folio::managers::section_tracker::{SectionTracker, SectionTrackerTrait};
use folio::types::layout::{LayoutProvider, LayoutSnapshot};
use folio::types::section::TRACKED_SECTIONS;
use proptest::prelude::*;

/// Each tracked section is either absent or has an arbitrary (possibly
/// overlapping) span.
fn arb_layout() -> impl Strategy<Value = LayoutSnapshot> {
    prop::collection::vec(prop::option::of((0u32..4000, 1u32..1500)), 4).prop_map(|spans| {
        let mut layout = LayoutSnapshot::new();
        for (id, span) in TRACKED_SECTIONS.iter().zip(spans) {
            if let Some((top, height)) = span {
                layout = layout.with_section(id, top as f64, height as f64);
            }
        }
        layout
    })
}

/// Reference implementation: first listed section whose span contains `point`.
fn expected_match(layout: &LayoutSnapshot, point: f64) -> Option<&'static str> {
    TRACKED_SECTIONS.iter().copied().find(|id| {
        layout
            .section_rect(id)
            .map(|r| r.top <= point && point < r.top + r.height)
            .unwrap_or(false)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn active_section_is_first_match_or_sticky(
        layout in arb_layout(),
        scrolls in prop::collection::vec(0u32..6000, 1..40),
    ) {
        let mut tracker = SectionTracker::default();
        for s in scrolls {
            let before = tracker.active().to_string();
            let changed = tracker.on_scroll(s as f64, &layout);
            let expected = expected_match(&layout, s as f64 + 100.0)
                .map(|id| id.to_string())
                .unwrap_or_else(|| before.clone());
            prop_assert_eq!(tracker.active(), expected.as_str());
            prop_assert_eq!(changed, before != expected);
        }
    }

    #[test]
    fn active_section_is_always_a_tracked_section(
        layout in arb_layout(),
        scrolls in prop::collection::vec(0u32..6000, 0..20),
    ) {
        let mut tracker = SectionTracker::default();
        for s in scrolls {
            tracker.on_scroll(s as f64, &layout);
            prop_assert!(TRACKED_SECTIONS.contains(&tracker.active()));
        }
    }

    #[test]
    fn repeated_scroll_is_idempotent(layout in arb_layout(), s in 0u32..6000) {
        let mut tracker = SectionTracker::default();
        tracker.on_scroll(s as f64, &layout);
        let first = tracker.active().to_string();
        prop_assert!(!tracker.on_scroll(s as f64, &layout));
        prop_assert_eq!(tracker.active(), first.as_str());
    }
}
