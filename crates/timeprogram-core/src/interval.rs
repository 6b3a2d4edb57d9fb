//! One contiguous on/off segment of a day.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::TimeOfDay;
use crate::error::Result;

/// A `(start, stop, on)` triple. `stop` of `00:00` means end of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: TimeOfDay,
    pub stop: TimeOfDay,
    pub on: bool,
}

impl Interval {
    pub fn new(start: TimeOfDay, stop: TimeOfDay, on: bool) -> Self {
        Self { start, stop, on }
    }

    /// Parse both ends from `HH:MM` strings.
    pub fn parse(start: &str, stop: &str, on: bool) -> Result<Self> {
        Ok(Self::new(start.parse()?, stop.parse()?, on))
    }

    /// Start minute of day.
    pub fn start_minutes(&self) -> u32 {
        self.start.minutes()
    }

    /// Stop minute of day, with `00:00` as 1440.
    pub fn stop_minutes(&self) -> u32 {
        self.stop.end_minutes()
    }

    /// Half-open `[start, stop)` intersection test.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start_minutes() < other.stop_minutes() && other.start_minutes() < self.stop_minutes()
    }

    /// Whether the 15-minute slot `index` lies inside `[start, stop)` on the bar.
    pub fn covers_slot(&self, index: usize) -> bool {
        let i = index as f64;
        i >= self.start.slot_index() && i < self.stop.end_slot_index()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {}",
            self.start,
            self.stop,
            if self.on { "ON" } else { "OFF" }
        )
    }
}
