//! Stopwatch state holder.
//!
//! Owns the observable [`StopwatchState`] (a `watch` channel sender) and the
//! optional [`TickSource`]. The tick source exists exactly while the
//! stopwatch is running.

use tokio::sync::watch;
use tracing::debug;

use lapwatch_types::{LapRecord, StopwatchState};

use crate::clock::{TICK_PERIOD, TickSource};

#[derive(Debug)]
pub struct Stopwatch {
    state: watch::Sender<StopwatchState>,
    ticker: Option<TickSource>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(StopwatchState::new());
        Self {
            state,
            ticker: None,
        }
    }

    /// Read-only view that is notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StopwatchState> {
        self.state.subscribe()
    }

    /// Borrow the current state. Drop the guard before calling a mutating method.
    #[must_use]
    pub fn state(&self) -> watch::Ref<'_, StopwatchState> {
        self.state.borrow()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }

    #[must_use]
    pub fn has_tick_source(&self) -> bool {
        self.ticker.is_some()
    }

    /// Start ticking. Ignored while already running, so at most one tick
    /// source is ever active.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.is_running() {
            debug!("Stopwatch start ignored: already running");
            return;
        }
        self.ticker = Some(TickSource::spawn(TICK_PERIOD));
        self.state.send_modify(|state| {
            state.mark_running();
        });
        debug!(period_ms = TICK_PERIOD.as_millis() as u64, "Stopwatch started");
    }

    /// Stop ticking. Ticks already delivered are applied first. Idempotent.
    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.process_ticks();
        self.ticker = None;
        self.state.send_modify(|state| {
            state.mark_paused();
        });
        debug!(elapsed = self.state.borrow().elapsed().get(), "Stopwatch paused");
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Cancel ticking and return to the initial state.
    pub fn reset(&mut self) {
        self.ticker = None;
        let changed = self.state.send_if_modified(StopwatchState::reset);
        debug!(changed, "Stopwatch reset");
    }

    /// Prepend a lap at the current time. Works while running or paused.
    pub fn record_lap_time(&mut self) -> LapRecord {
        let mut recorded = None;
        self.state.send_modify(|state| {
            recorded = Some(state.record_lap());
        });
        let Some(lap) = recorded else {
            unreachable!("send_modify runs the closure exactly once");
        };
        debug!(lap = %lap, "Lap recorded");
        lap
    }

    /// Apply every tick delivered since the last call. Returns the count.
    pub fn process_ticks(&mut self) -> u64 {
        let Some(ticker) = self.ticker.as_mut() else {
            return 0;
        };
        let ticks = ticker.drain();
        if ticks > 0 {
            self.state.send_if_modified(|state| state.advance(ticks));
        }
        ticks
    }
}
