//! Property-based tests for normalization using proptest.
//!
//! These hold for *any* list of well-formed quarter-hour intervals, not just
//! the hand-picked cases in `normalize_tests.rs`.

use proptest::prelude::*;
use timeprogram_core::clock::{from_slot_index, SLOTS_PER_DAY};
use timeprogram_core::normalize::normalize;
use timeprogram_core::{register, Interval, WeekSchedule};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A well-formed interval: stop slot strictly after start slot, slot 96 is `00:00`.
fn arb_interval() -> impl Strategy<Value = Interval> {
    (0..SLOTS_PER_DAY, 1..=SLOTS_PER_DAY, any::<bool>()).prop_map(|(start, len, on)| {
        let stop = (start + len).min(SLOTS_PER_DAY).max(start + 1);
        Interval::new(from_slot_index(start), from_slot_index(stop), on)
    })
}

fn arb_day() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(arb_interval(), 0..12)
}

fn on_slots(intervals: &[Interval]) -> [bool; SLOTS_PER_DAY] {
    let mut slots = [false; SLOTS_PER_DAY];
    for interval in intervals.iter().filter(|i| i.on) {
        for (index, slot) in slots.iter_mut().enumerate() {
            if interval.covers_slot(index) {
                *slot = true;
            }
        }
    }
    slots
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn normalize_is_idempotent(day in arb_day()) {
        let once = normalize(&day);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn on_intervals_never_overlap_or_reorder(day in arb_day()) {
        let out = normalize(&day);
        let on: Vec<&Interval> = out.iter().filter(|i| i.on).collect();
        for pair in on.windows(2) {
            prop_assert!(
                pair[0].stop_minutes() <= pair[1].start_minutes(),
                "{} overlaps {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn on_intervals_never_overlap_off_markers(day in arb_day()) {
        let out = normalize(&day);
        for on in out.iter().filter(|i| i.on) {
            for off in out.iter().filter(|i| !i.on) {
                prop_assert!(!on.overlaps(off), "{} overlaps {}", on, off);
            }
        }
    }

    #[test]
    fn full_covering_off_erases_all_on_time(day in arb_day()) {
        let mut input = day.clone();
        input.push(Interval::new(from_slot_index(0), from_slot_index(SLOTS_PER_DAY), false));
        prop_assert!(normalize(&input).iter().all(|i| !i.on));
    }

    #[test]
    fn output_is_sorted_by_start_then_stop(day in arb_day()) {
        let out = normalize(&day);
        for pair in out.windows(2) {
            let a = (pair[0].start_minutes(), pair[0].stop_minutes());
            let b = (pair[1].start_minutes(), pair[1].stop_minutes());
            prop_assert!(a <= b);
        }
    }

    #[test]
    fn off_markers_survive_unchanged(day in arb_day()) {
        let out = normalize(&day);
        let mut expected: Vec<Interval> = day.iter().filter(|i| !i.on).copied().collect();
        let mut actual: Vec<Interval> = out.iter().filter(|i| !i.on).copied().collect();
        expected.sort_by_key(|i| (i.start_minutes(), i.stop_minutes()));
        actual.sort_by_key(|i| (i.start_minutes(), i.stop_minutes()));
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn normalize_never_adds_on_time(day in arb_day()) {
        let before = on_slots(&day);
        let after = on_slots(&normalize(&day));
        for index in 0..SLOTS_PER_DAY {
            prop_assert!(!after[index] || before[index], "slot {} gained coverage", index);
        }
    }

    #[test]
    fn register_roundtrip_preserves_on_geometry(day in arb_day()) {
        let mut week = WeekSchedule::default();
        week.wed.timeslots = normalize(&day);
        let decoded = register::decode(&register::encode(&week)).unwrap();
        prop_assert_eq!(on_slots(&decoded.wed.timeslots), on_slots(&week.wed.timeslots));
        prop_assert!(decoded.mon.timeslots.is_empty());
    }
}
