//! Edit session: the mutable draft, the last-saved snapshot, and the
//! intervals added since the last save.

use log::debug;

use crate::interval::Interval;
use crate::normalize::normalize;
use crate::schedule::{PersistableSchedule, WeekSchedule, Weekday};

/// One rendered row of a day.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRow {
    /// Index to pass back to [`EditSession::delete_interval`].
    pub index: usize,
    pub interval: Interval,
    /// Added since the last save or revert.
    pub is_new: bool,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    draft: WeekSchedule,
    snapshot: WeekSchedule,
    added: [Vec<Interval>; 7],
    dirty: bool,
    collapsed: bool,
}

impl EditSession {
    /// Start a session from the host's schedule.
    ///
    /// Each day is put into display order (not merged), so row indices and
    /// the stored list agree from the start.
    pub fn new(mut week: WeekSchedule) -> Self {
        week.sort_for_display();
        Self {
            snapshot: week.clone(),
            draft: week,
            added: Default::default(),
            dirty: false,
            collapsed: false,
        }
    }

    pub fn draft(&self) -> &WeekSchedule {
        &self.draft
    }

    pub fn snapshot(&self) -> &WeekSchedule {
        &self.snapshot
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn intervals(&self, day: Weekday) -> &[Interval] {
        &self.draft.day(day).timeslots
    }

    /// Append `interval` to `day`, mark it new, and renormalize the day.
    pub fn add_interval(&mut self, day: Weekday, interval: Interval) {
        let added = &mut self.added[day.index()];
        if !added.contains(&interval) {
            added.push(interval);
        }

        let slots = &mut self.draft.day_mut(day).timeslots;
        slots.push(interval);
        *slots = normalize(slots);
        self.dirty = true;
        debug!("{}: added {}, {} intervals", day, interval, slots.len());
    }

    /// Remove the interval at display `index` of `day`.
    ///
    /// Out-of-range indices are ignored and leave the session clean.
    pub fn delete_interval(&mut self, day: Weekday, index: usize) -> Option<Interval> {
        let slots = &mut self.draft.day_mut(day).timeslots;
        if index >= slots.len() {
            return None;
        }
        let removed = slots.remove(index);
        self.dirty = true;
        debug!("{}: deleted {} at {}", day, removed, index);
        Some(removed)
    }

    /// Whether `interval` was added to `day` since the last save or revert.
    pub fn is_new(&self, day: Weekday, interval: &Interval) -> bool {
        self.added[day.index()].contains(interval)
    }

    /// Display rows for `day`, in stored order.
    pub fn rows(&self, day: Weekday) -> Vec<SlotRow> {
        self.intervals(day)
            .iter()
            .enumerate()
            .map(|(index, interval)| SlotRow {
                index,
                interval: *interval,
                is_new: self.is_new(day, interval),
            })
            .collect()
    }

    /// Snapshot the draft and return its "on"-only projection for the host.
    pub fn commit(&mut self) -> PersistableSchedule {
        let persistable = self.draft.persistable();
        self.snapshot = self.draft.clone();
        self.clear_tracking();
        debug!("committed draft");
        persistable
    }

    /// Throw the draft away and go back to the last snapshot.
    pub fn revert(&mut self) {
        self.draft = self.snapshot.clone();
        self.clear_tracking();
        debug!("reverted draft to snapshot");
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    fn clear_tracking(&mut self) {
        for added in self.added.iter_mut() {
            added.clear();
        }
        self.dirty = false;
    }
}
