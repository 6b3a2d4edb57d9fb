//! Quarter-hour time picker model.
//!
//! Holds the value under selection and an optional exclusive lower bound
//! (the start time when picking a stop). When a bound is set the value is
//! read as a stop, so `00:00` counts as end of day and is accepted.

use crate::clock::{TimeOfDay, SLOT_MINUTES};
use crate::error::{Result, TimeprogramError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePicker {
    value: TimeOfDay,
    min_exclusive: Option<TimeOfDay>,
}

impl TimePicker {
    pub fn new(default: TimeOfDay, min_exclusive: Option<TimeOfDay>) -> Self {
        Self {
            value: default,
            min_exclusive,
        }
    }

    pub fn value(&self) -> TimeOfDay {
        self.value
    }

    pub fn min_exclusive(&self) -> Option<TimeOfDay> {
        self.min_exclusive
    }

    /// Overwrite the value, as when the user types into the inputs.
    pub fn set(&mut self, value: TimeOfDay) {
        self.value = value;
    }

    pub fn hour_up(&mut self) {
        self.shift(60);
    }

    pub fn hour_down(&mut self) {
        self.shift(-60);
    }

    pub fn minute_up(&mut self) {
        self.shift(SLOT_MINUTES as i64);
    }

    pub fn minute_down(&mut self) {
        self.shift(-(SLOT_MINUTES as i64));
    }

    /// False when one hour back would land at or before the bound.
    pub fn can_hour_down(&self) -> bool {
        self.allows(self.shifted(-60))
    }

    /// False when one quarter-hour back would land at or before the bound.
    pub fn can_minute_down(&self) -> bool {
        self.allows(self.shifted(-(SLOT_MINUTES as i64)))
    }

    /// Accept the current value, or reject it if it is not after the bound.
    pub fn confirm(&self) -> Result<TimeOfDay> {
        match self.min_exclusive {
            Some(min) if !self.allows(self.value) => Err(TimeprogramError::ValidationRejected {
                start: min.to_string(),
                stop: self.value.to_string(),
            }),
            _ => Ok(self.value),
        }
    }

    fn allows(&self, candidate: TimeOfDay) -> bool {
        match self.min_exclusive {
            Some(min) => candidate.end_minutes() > min.minutes(),
            None => true,
        }
    }

    fn shifted(&self, delta: i64) -> TimeOfDay {
        TimeOfDay::from_minutes_wrapping(self.value.minutes() as i64 + delta)
    }

    fn shift(&mut self, delta: i64) {
        self.value = self.shifted(delta);
    }
}
