//! The three-step "add interval" interaction.
//!
//! `AwaitingStart -> AwaitingStop -> AwaitingOnOff -> Committed`, with a
//! cancel from any open step collapsing to `Cancelled`. Nothing touches the
//! draft until the flow is `Committed` and handed to the session.

use crate::clock::TimeOfDay;
use crate::error::{Result, TimeprogramError};
use crate::interval::Interval;
use crate::picker::TimePicker;
use crate::schedule::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStep {
    AwaitingStart,
    AwaitingStop { start: TimeOfDay },
    AwaitingOnOff { start: TimeOfDay, stop: TimeOfDay },
    Committed(Interval),
    Cancelled,
}

/// A user answer to the prompt of the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowInput {
    Time(TimeOfDay),
    OnOff(bool),
    Cancel,
}

#[derive(Debug, Clone)]
pub struct AddFlow {
    day: Weekday,
    default_start: TimeOfDay,
    default_stop: TimeOfDay,
    step: AddStep,
}

impl AddFlow {
    pub fn new(day: Weekday, default_start: TimeOfDay, default_stop: TimeOfDay) -> Self {
        Self {
            day,
            default_start,
            default_stop,
            step: AddStep::AwaitingStart,
        }
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn step(&self) -> AddStep {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.step, AddStep::Committed(_) | AddStep::Cancelled)
    }

    /// The interval to insert, once all three answers are in.
    pub fn committed(&self) -> Option<Interval> {
        match self.step {
            AddStep::Committed(interval) => Some(interval),
            _ => None,
        }
    }

    /// A picker seeded for the current time prompt, if the step asks for a time.
    pub fn picker(&self) -> Option<TimePicker> {
        match self.step {
            AddStep::AwaitingStart => Some(TimePicker::new(self.default_start, None)),
            AddStep::AwaitingStop { start } => Some(TimePicker::new(self.default_stop, Some(start))),
            _ => None,
        }
    }

    /// Feed one answer into the flow.
    ///
    /// A stop not strictly after the start is rejected with
    /// [`TimeprogramError::ValidationRejected`] and the flow stays at
    /// `AwaitingStop` so the prompt can be repeated.
    pub fn advance(&mut self, input: FlowInput) -> Result<AddStep> {
        self.step = match (self.step, input) {
            (AddStep::Committed(_) | AddStep::Cancelled, _) => {
                return Err(TimeprogramError::InvalidStep(format!(
                    "flow already finished, got {:?}",
                    input
                )));
            }
            (_, FlowInput::Cancel) => AddStep::Cancelled,
            (AddStep::AwaitingStart, FlowInput::Time(start)) => AddStep::AwaitingStop { start },
            (AddStep::AwaitingStop { start }, FlowInput::Time(stop)) => {
                let stop = TimePicker::new(stop, Some(start)).confirm()?;
                AddStep::AwaitingOnOff { start, stop }
            }
            (AddStep::AwaitingOnOff { start, stop }, FlowInput::OnOff(on)) => {
                AddStep::Committed(Interval::new(start, stop, on))
            }
            (step, input) => {
                return Err(TimeprogramError::InvalidStep(format!(
                    "{:?} does not accept {:?}",
                    step, input
                )));
            }
        };
        Ok(self.step)
    }

    /// Answer a time prompt; `None` is the picker's cancel.
    pub fn choose_time(&mut self, time: Option<TimeOfDay>) -> Result<AddStep> {
        self.advance(time.map_or(FlowInput::Cancel, FlowInput::Time))
    }

    /// Answer the on/off prompt; `None` is the picker's cancel.
    pub fn choose_on(&mut self, on: Option<bool>) -> Result<AddStep> {
        self.advance(on.map_or(FlowInput::Cancel, FlowInput::OnOff))
    }

    pub fn cancel(&mut self) {
        if !self.is_finished() {
            self.step = AddStep::Cancelled;
        }
    }
}
