//! Weekday keys and the per-day / per-week schedule containers.
//!
//! The serialized shape matches the host's `timeprogram` attribute:
//! `{"mon": {"timeslots": [...]}, ..., "sun": {"timeslots": [...]}}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeprogramError};
use crate::interval::Interval;
use crate::normalize::sort_for_display;

/// The seven fixed day keys, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Position in [`Weekday::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Weekday {
    type Err = TimeprogramError;

    fn from_str(s: &str) -> Result<Self> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| TimeprogramError::Parse(format!("unknown weekday '{}'", s)))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One day's interval list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayProgram {
    #[serde(default)]
    pub timeslots: Vec<Interval>,
}

/// All seven days. Days absent from input deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    #[serde(default)]
    pub mon: DayProgram,
    #[serde(default)]
    pub tue: DayProgram,
    #[serde(default)]
    pub wed: DayProgram,
    #[serde(default)]
    pub thu: DayProgram,
    #[serde(default)]
    pub fri: DayProgram,
    #[serde(default)]
    pub sat: DayProgram,
    #[serde(default)]
    pub sun: DayProgram,
}

impl WeekSchedule {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn day(&self, day: Weekday) -> &DayProgram {
        match day {
            Weekday::Mon => &self.mon,
            Weekday::Tue => &self.tue,
            Weekday::Wed => &self.wed,
            Weekday::Thu => &self.thu,
            Weekday::Fri => &self.fri,
            Weekday::Sat => &self.sat,
            Weekday::Sun => &self.sun,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DayProgram {
        match day {
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
            Weekday::Sun => &mut self.sun,
        }
    }

    /// Days in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayProgram)> {
        Weekday::ALL.into_iter().map(move |d| (d, self.day(d)))
    }

    /// Sort every day into display order without merging anything.
    pub fn sort_for_display(&mut self) {
        for day in Weekday::ALL {
            sort_for_display(&mut self.day_mut(day).timeslots);
        }
    }

    /// Project to the shape the device accepts: "on" intervals only, each
    /// day in display order.
    pub fn persistable(&self) -> PersistableSchedule {
        let mut week = self.clone();
        for day in Weekday::ALL {
            let slots = &mut week.day_mut(day).timeslots;
            slots.retain(|slot| slot.on);
            sort_for_display(slots);
        }
        PersistableSchedule(week)
    }
}

/// A week containing only "on" intervals, ready to send to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PersistableSchedule(WeekSchedule);

impl PersistableSchedule {
    pub fn week(&self) -> &WeekSchedule {
        &self.0
    }

    pub fn into_week(self) -> WeekSchedule {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: &str, stop: &str, on: bool) -> Interval {
        Interval::parse(start, stop, on).unwrap()
    }

    #[test]
    fn persistable_filters_and_orders_each_day() {
        let mut week = WeekSchedule::default();
        week.thu.timeslots = vec![
            iv("18:00", "20:00", true),
            iv("10:00", "11:00", false),
            iv("06:00", "08:00", true),
        ];

        let persisted = week.persistable();

        assert_eq!(
            persisted.week().thu.timeslots,
            vec![iv("06:00", "08:00", true), iv("18:00", "20:00", true)]
        );
        assert!(persisted.week().mon.timeslots.is_empty());
    }
}
