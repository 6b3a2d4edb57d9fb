//! Device register codec.
//!
//! The heat pump stores a week as 168 hex digits: seven 24-digit day blocks
//! in the order sat, fri, tue, wed, thu, mon, sun. Each block holds one bit
//! per quarter hour. Slot `s` is bit `s % 4` of digit `23 - s / 4`, so the
//! block reads right to left, least significant bit first.

use crate::clock::{from_slot_index, SLOTS_PER_DAY};
use crate::error::{Result, TimeprogramError};
use crate::interval::Interval;
use crate::schedule::{WeekSchedule, Weekday};

/// Hex digits in a full week register.
pub const REGISTER_LEN: usize = 168;

const DIGITS_PER_DAY: usize = SLOTS_PER_DAY / 4;

/// Day order of the blocks in the register.
pub const REGISTER_DAY_ORDER: [Weekday; 7] = [
    Weekday::Sat,
    Weekday::Fri,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Mon,
    Weekday::Sun,
];

/// Decode a register into a week of "on" intervals.
///
/// Each run of set bits becomes one interval; a run reaching the end of the
/// day stops at `00:00`.
pub fn decode(hex: &str) -> Result<WeekSchedule> {
    let hex = hex.trim();
    let len = hex.chars().count();
    if len != REGISTER_LEN {
        return Err(TimeprogramError::Register(format!(
            "expected {} hex digits, got {}",
            REGISTER_LEN, len
        )));
    }

    let digits = hex
        .chars()
        .map(|c| {
            c.to_digit(16)
                .ok_or_else(|| TimeprogramError::Register(format!("'{}' is not a hex digit", c)))
        })
        .collect::<Result<Vec<u32>>>()?;

    let mut week = WeekSchedule::default();
    for (block, day) in REGISTER_DAY_ORDER.into_iter().enumerate() {
        let block_digits = &digits[block * DIGITS_PER_DAY..(block + 1) * DIGITS_PER_DAY];
        let mut bits = [false; SLOTS_PER_DAY];
        for (slot, bit) in bits.iter_mut().enumerate() {
            let digit = block_digits[DIGITS_PER_DAY - 1 - slot / 4];
            *bit = (digit >> (slot % 4)) & 1 == 1;
        }
        week.day_mut(day).timeslots = runs(&bits);
    }

    Ok(week)
}

/// Encode the "on" intervals of a week as a register string (uppercase hex).
///
/// "Off" intervals are ignored. Starts round down to their slot; a stop of
/// `00:00` covers through slot 95.
pub fn encode(week: &WeekSchedule) -> String {
    let mut out = String::with_capacity(REGISTER_LEN);

    for day in REGISTER_DAY_ORDER {
        let mut bits = [false; SLOTS_PER_DAY];
        for interval in week.day(day).timeslots.iter().filter(|i| i.on) {
            let start = (interval.start.slot_index() as usize).min(SLOTS_PER_DAY - 1);
            let stop = if interval.stop.is_midnight() {
                SLOTS_PER_DAY
            } else {
                (interval.stop.slot_index() as usize).min(SLOTS_PER_DAY - 1)
            };
            for bit in bits.iter_mut().take(stop).skip(start) {
                *bit = true;
            }
        }

        let mut block = [0u32; DIGITS_PER_DAY];
        for (slot, _) in bits.iter().enumerate().filter(|(_, set)| **set) {
            block[DIGITS_PER_DAY - 1 - slot / 4] |= 1 << (slot % 4);
        }
        for digit in block {
            // Values are masked to a nibble above.
            if let Some(c) = char::from_digit(digit, 16) {
                out.push(c.to_ascii_uppercase());
            }
        }
    }

    out
}

/// Turn a day's slot bits into "on" intervals.
fn runs(bits: &[bool; SLOTS_PER_DAY]) -> Vec<Interval> {
    let mut intervals = Vec::new();
    let mut run_start: Option<usize> = None;

    for (slot, &set) in bits.iter().enumerate() {
        match (set, run_start) {
            (true, None) => run_start = Some(slot),
            (false, Some(start)) => {
                intervals.push(Interval::new(from_slot_index(start), from_slot_index(slot), true));
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        intervals.push(Interval::new(
            from_slot_index(start),
            from_slot_index(SLOTS_PER_DAY),
            true,
        ));
    }

    intervals
}
