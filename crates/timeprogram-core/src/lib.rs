//! # timeprogram-core
//!
//! Editing engine for weekly on/off heating and hot-water schedules
//! ("timeprograms") of a heat pump exposed through a home-automation host.
//!
//! The heart of the crate is [`normalize`]: given one day's unordered
//! `(start, stop, on)` intervals it cuts "off" spans out of "on" intervals,
//! merges what touches, and returns a canonical ordered list. Around it sit
//! an [`EditSession`] (draft, saved snapshot, "new" tracking) and a
//! [`ScheduleEditor`] that binds a session to a host entity.
//!
//! ## Quick start
//!
//! ```rust
//! use timeprogram_core::{normalize, Interval};
//!
//! let day = vec![
//!     Interval::parse("08:00", "12:00", true).unwrap(),
//!     Interval::parse("10:00", "11:00", false).unwrap(),
//! ];
//! let out = normalize(&day);
//! assert_eq!(out.len(), 3);
//! assert_eq!(out[0].stop.to_string(), "10:00");
//! ```
//!
//! ## Modules
//!
//! - [`clock`]: `HH:MM` parsing, minute and slot arithmetic
//! - [`interval`]: the `(start, stop, on)` triple
//! - [`normalize`]: cut, merge and order a day's intervals
//! - [`schedule`]: weekday keys, day and week containers
//! - [`coverage`]: 96-slot coverage bar
//! - [`session`]: draft / snapshot bookkeeping
//! - [`add_flow`]: start → stop → on/off interaction state machine
//! - [`picker`]: quarter-hour time picker model
//! - [`host`]: host state reader and command dispatcher seams
//! - [`editor`]: session bound to a host entity
//! - [`register`]: device register hex codec
//! - [`config`]: editor configuration
//! - [`error`]: error types

pub mod add_flow;
pub mod clock;
pub mod config;
pub mod coverage;
pub mod editor;
pub mod error;
pub mod host;
pub mod interval;
pub mod normalize;
pub mod picker;
pub mod register;
pub mod schedule;
pub mod session;

pub use add_flow::{AddFlow, AddStep, FlowInput};
pub use clock::TimeOfDay;
pub use config::EditorConfig;
pub use editor::ScheduleEditor;
pub use error::TimeprogramError;
pub use host::{CommandDispatcher, HostStateReader, InMemoryHost};
pub use interval::Interval;
pub use normalize::normalize;
pub use schedule::{DayProgram, PersistableSchedule, WeekSchedule, Weekday};
pub use session::EditSession;
