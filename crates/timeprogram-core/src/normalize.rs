//! Canonicalize a day's interval list.
//!
//! "Off" intervals cut their span out of every overlapping "on" interval,
//! then stay in the list as markers. Touching or overlapping "on" intervals
//! are merged. The result is ordered by start, then by stop.

use crate::interval::Interval;

/// Normalize an unordered list of intervals for one day.
///
/// Every "off" interval cuts every "on" interval it overlaps, wherever the
/// two sit in the input, so no surviving "on" time overlaps an "off" marker.
///
/// Pure and deterministic. Zero-length or inverted intervals are not rejected
/// here; callers only build intervals whose stop lies after the start.
pub fn normalize(intervals: &[Interval]) -> Vec<Interval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|i| i.start_minutes());
    let (on, off): (Vec<Interval>, Vec<Interval>) = sorted.into_iter().partition(|i| i.on);

    let mut cut = off.iter().fold(on, apply_cut);
    sort_for_display(&mut cut);

    let mut result = merge_on(cut);
    result.extend(off);
    sort_for_display(&mut result);
    result
}

/// Subtract `cut`'s span from every "on" interval in `slots`.
///
/// An "on" interval inside the cut is dropped, one straddling an edge is
/// truncated at that edge, and one straddling both edges is split in two.
/// "Off" intervals and non-overlapping "on" intervals pass through.
pub fn apply_cut(slots: Vec<Interval>, cut: &Interval) -> Vec<Interval> {
    let cut_start = cut.start_minutes();
    let cut_stop = cut.stop_minutes();
    let mut result = Vec::with_capacity(slots.len() + 1);

    for slot in slots {
        if !slot.on {
            result.push(slot);
            continue;
        }

        let slot_start = slot.start_minutes();
        let slot_stop = slot.stop_minutes();
        if slot_stop <= cut_start || slot_start >= cut_stop {
            result.push(slot);
            continue;
        }

        if slot_start < cut_start {
            result.push(Interval::new(slot.start, cut.start, true));
        }
        if slot_stop > cut_stop {
            result.push(Interval::new(cut.stop, slot.stop, true));
        }
    }

    result
}

/// Collapse runs of touching or overlapping "on" intervals.
///
/// An "off" interval ends the current run and is emitted unchanged.
pub fn merge_on(slots: Vec<Interval>) -> Vec<Interval> {
    let mut merged = Vec::with_capacity(slots.len());
    let mut current: Option<Interval> = None;

    for slot in slots {
        if !slot.on {
            if let Some(run) = current.take() {
                merged.push(run);
            }
            merged.push(slot);
            continue;
        }

        if let Some(run) = current.as_mut() {
            if slot.start_minutes() <= run.stop_minutes() {
                if slot.stop_minutes() > run.stop_minutes() {
                    run.stop = slot.stop;
                }
                continue;
            }
        }

        if let Some(run) = current.replace(slot) {
            merged.push(run);
        }
    }

    if let Some(run) = current {
        merged.push(run);
    }

    merged
}

/// Order by start minute, then by stop minute (`00:00` stop last).
pub fn sort_for_display(intervals: &mut [Interval]) {
    intervals.sort_by_key(|i| (i.start_minutes(), i.stop_minutes()));
}
