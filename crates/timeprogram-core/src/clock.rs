//! Wall-clock time arithmetic for a single day.
//!
//! Times are `HH:MM` strings within one day. A stop value of `00:00` means the
//! end of the day (minute 1440), never the start of the next one.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeprogramError};

/// Minutes in one day; the value a `00:00` stop resolves to.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Quarter-hour buckets per day on the coverage bar and in the device register.
pub const SLOTS_PER_DAY: usize = 96;

/// Width of one slot in minutes.
pub const SLOT_MINUTES: u32 = 15;

/// A wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// `00:00`, which reads as start of day for a start value and end of day for a stop value.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(TimeprogramError::Parse(format!(
                "invalid time of day '{:02}:{:02}'",
                hour, minute
            )));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Build a time from a minute count, wrapping around the day in either direction.
    pub fn from_minutes_wrapping(minutes: i64) -> Self {
        let m = minutes.rem_euclid(MINUTES_PER_DAY as i64) as u32;
        Self {
            hour: (m / 60) as u8,
            minute: (m % 60) as u8,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    pub fn is_midnight(&self) -> bool {
        *self == Self::MIDNIGHT
    }

    /// Minute of day when read as a start value (0..1440).
    pub fn minutes(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Minute of day when read as a stop value: `00:00` maps to 1440.
    pub fn end_minutes(&self) -> u32 {
        if self.is_midnight() {
            MINUTES_PER_DAY
        } else {
            self.minutes()
        }
    }

    /// Position on the 96-slot bar when read as a start value.
    pub fn slot_index(&self) -> f64 {
        self.hour() as f64 * 4.0 + self.minute() as f64 / SLOT_MINUTES as f64
    }

    /// Position on the 96-slot bar when read as a stop value: `00:00` maps to slot 96.
    pub fn end_slot_index(&self) -> f64 {
        if self.is_midnight() {
            SLOTS_PER_DAY as f64
        } else {
            self.slot_index()
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeprogramError;

    fn from_str(s: &str) -> Result<Self> {
        // chrono is lenient about digit counts and padding; the host format is not.
        let well_formed = s.len() == 5
            && s.bytes().enumerate().all(|(i, b)| {
                if i == 2 {
                    b == b':'
                } else {
                    b.is_ascii_digit()
                }
            });
        if !well_formed {
            return Err(invalid_time(s));
        }
        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| invalid_time(s))?;
        Self::new(time.hour(), time.minute())
    }
}

fn invalid_time(s: &str) -> TimeprogramError {
    TimeprogramError::Parse(format!("invalid time of day '{}'", s))
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeprogramError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse `HH:MM` and return `h * 60 + m`.
pub fn to_minutes(t: &str) -> Result<u32> {
    Ok(t.parse::<TimeOfDay>()?.minutes())
}

/// Like [`to_minutes`], but `00:00` is end of day (1440). Only for stop values.
pub fn end_minutes(t: &str) -> Result<u32> {
    Ok(t.parse::<TimeOfDay>()?.end_minutes())
}

/// Time at the start of a 15-minute slot. Slot 96 wraps to `00:00` (end of day).
pub fn from_slot_index(index: usize) -> TimeOfDay {
    let index = index % SLOTS_PER_DAY;
    TimeOfDay {
        hour: (index / 4) as u8,
        minute: ((index % 4) as u32 * SLOT_MINUTES) as u8,
    }
}

/// `hour * 4 + minute / 15` for a start value.
pub fn slot_index(t: &str) -> Result<f64> {
    Ok(t.parse::<TimeOfDay>()?.slot_index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_single_digit_hour() {
        assert!("8:00".parse::<TimeOfDay>().is_err());
        assert!("08:0".parse::<TimeOfDay>().is_err());
        assert!("08-00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn wrapping_from_minutes() {
        assert_eq!(TimeOfDay::from_minutes_wrapping(-15).to_string(), "23:45");
        assert_eq!(TimeOfDay::from_minutes_wrapping(1440).to_string(), "00:00");
        assert_eq!(TimeOfDay::from_minutes_wrapping(615).to_string(), "10:15");
    }
}
