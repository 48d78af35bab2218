//! Core domain types for Lapwatch.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod lap;
mod stopwatch;
mod time;
pub mod ui;

pub use lap::LapRecord;
pub use stopwatch::StopwatchState;
pub use time::{CENTIS_PER_SECOND, Centis, HundredthsStyle, SplitTime};
pub use ui::UiOptions;
