//! Quarter-hour coverage of a day, for the per-day bar.

use serde::Serialize;

use crate::clock::SLOTS_PER_DAY;
use crate::interval::Interval;

/// State of one 15-minute slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Coverage {
    #[default]
    None,
    On,
    Off,
}

/// Map a day's intervals onto 96 slots.
///
/// The first interval (in the given order) covering a slot decides its state,
/// so pass the list in display order.
pub fn bar(intervals: &[Interval]) -> [Coverage; SLOTS_PER_DAY] {
    let mut slots = [Coverage::None; SLOTS_PER_DAY];
    for (index, slot) in slots.iter_mut().enumerate() {
        if let Some(interval) = intervals.iter().find(|i| i.covers_slot(index)) {
            *slot = if interval.on {
                Coverage::On
            } else {
                Coverage::Off
            };
        }
    }
    slots
}
