//! Tests for time arithmetic and the coverage bar.

use timeprogram_core::clock::{end_minutes, from_slot_index, slot_index, to_minutes};
use timeprogram_core::coverage::{bar, Coverage};
use timeprogram_core::{Interval, TimeOfDay, TimeprogramError};

#[test]
fn to_minutes_parses_hh_mm() {
    assert_eq!(to_minutes("00:00").unwrap(), 0);
    assert_eq!(to_minutes("08:15").unwrap(), 495);
    assert_eq!(to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn end_minutes_only_differs_at_midnight() {
    assert_eq!(end_minutes("00:00").unwrap(), 1440);
    assert_eq!(end_minutes("00:15").unwrap(), 15);
    assert_eq!(end_minutes("12:30").unwrap(), 750);
}

#[test]
fn malformed_times_are_parse_errors() {
    for bad in ["24:00", "12:60", "ab:cd", "", "1200", "12:00:00", " 9:00"] {
        let err = to_minutes(bad).unwrap_err();
        assert!(
            matches!(err, TimeprogramError::Parse(_)),
            "{:?} should be a parse error",
            bad
        );
    }
}

#[test]
fn slot_index_roundtrip() {
    assert_eq!(from_slot_index(0).to_string(), "00:00");
    assert_eq!(from_slot_index(37).to_string(), "09:15");
    assert_eq!(from_slot_index(95).to_string(), "23:45");
    assert_eq!(from_slot_index(96).to_string(), "00:00");

    assert_eq!(slot_index("09:30").unwrap(), 38.0);
    assert!((slot_index("09:40").unwrap() - (36.0 + 40.0 / 15.0)).abs() < 1e-9);
    let midnight: TimeOfDay = "00:00".parse().unwrap();
    assert_eq!(midnight.slot_index(), 0.0);
    assert_eq!(midnight.end_slot_index(), 96.0);
}

#[test]
fn time_of_day_serializes_as_string() {
    let interval = Interval::parse("06:45", "00:00", true).unwrap();
    let json = serde_json::to_string(&interval).unwrap();
    assert_eq!(json, r#"{"start":"06:45","stop":"00:00","on":true}"#);

    let back: Interval = serde_json::from_str(&json).unwrap();
    assert_eq!(back, interval);

    assert!(serde_json::from_str::<Interval>(r#"{"start":"6:45","stop":"07:00","on":true}"#).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Coverage bar
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bar_marks_covered_quarter_hours() {
    let slots = bar(&[
        Interval::parse("08:00", "09:00", true).unwrap(),
        Interval::parse("09:00", "09:30", false).unwrap(),
    ]);

    assert_eq!(slots[31], Coverage::None);
    assert!(slots[32..36].iter().all(|s| *s == Coverage::On));
    assert_eq!(slots[36], Coverage::Off);
    assert_eq!(slots[37], Coverage::Off);
    assert_eq!(slots[38], Coverage::None);
}

#[test]
fn bar_runs_midnight_stop_to_last_slot() {
    let slots = bar(&[Interval::parse("22:00", "00:00", true).unwrap()]);
    assert!(slots[88..].iter().all(|s| *s == Coverage::On));
    assert_eq!(slots[0], Coverage::None);
}

#[test]
fn bar_first_interval_wins() {
    let slots = bar(&[
        Interval::parse("08:00", "12:00", false).unwrap(),
        Interval::parse("10:00", "14:00", true).unwrap(),
    ]);
    assert_eq!(slots[44], Coverage::Off);
    assert_eq!(slots[48], Coverage::On);
}
