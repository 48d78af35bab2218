//! Stopwatch state: elapsed counter, running flag and lap list.
//!
//! Pure data with no timer attached. The engine owns the clock driver and
//! feeds ticks in through [`StopwatchState::advance`].

use std::collections::VecDeque;

use crate::lap::LapRecord;
use crate::time::{Centis, HundredthsStyle, SplitTime};

const FIRST_LAP: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchState {
    elapsed: Centis,
    running: bool,
    /// Newest first.
    laps: VecDeque<LapRecord>,
    next_lap: u32,
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwatchState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elapsed: Centis::ZERO,
            running: false,
            laps: VecDeque::new(),
            next_lap: FIRST_LAP,
        }
    }

    #[must_use]
    pub const fn elapsed(&self) -> Centis {
        self.elapsed
    }

    #[must_use]
    pub const fn split(&self) -> SplitTime {
        self.elapsed.split()
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Recorded laps, newest first.
    pub fn laps(&self) -> impl ExactSizeIterator<Item = &LapRecord> + DoubleEndedIterator {
        self.laps.iter()
    }

    #[must_use]
    pub fn lap_count(&self) -> usize {
        self.laps.len()
    }

    /// Number the next recorded lap will carry.
    #[must_use]
    pub const fn next_lap_number(&self) -> u32 {
        self.next_lap
    }

    #[must_use]
    pub fn lap_labels(&self, style: HundredthsStyle) -> Vec<String> {
        self.laps.iter().map(|lap| lap.label(style)).collect()
    }

    /// Returns `true` if the flag changed.
    pub fn mark_running(&mut self) -> bool {
        !std::mem::replace(&mut self.running, true)
    }

    /// Returns `true` if the flag changed.
    pub fn mark_paused(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Apply `ticks` clock ticks. Ignored unless running.
    ///
    /// Returns `true` if the elapsed time changed.
    pub fn advance(&mut self, ticks: u64) -> bool {
        if !self.running || ticks == 0 {
            return false;
        }
        let before = self.elapsed;
        self.elapsed = self.elapsed.advanced(ticks);
        self.elapsed != before
    }

    /// Zero the counter, clear laps, restart lap numbering and stop.
    ///
    /// Returns `true` if anything changed.
    pub fn reset(&mut self) -> bool {
        if *self == Self::new() {
            return false;
        }
        *self = Self::new();
        true
    }

    /// Prepend a lap at the current elapsed time and bump the lap counter.
    pub fn record_lap(&mut self) -> LapRecord {
        let lap = LapRecord::new(self.next_lap, self.split());
        self.laps.push_front(lap);
        self.next_lap = self.next_lap.saturating_add(1);
        lap
    }
}
