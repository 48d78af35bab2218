//! Clock driver: a periodic tokio task that emits one tick per period.
//!
//! The task never touches stopwatch state. It only sends unit messages; the
//! owner drains them on its own context via [`TickSource::drain`].

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Nominal tick period. One tick is one hundredth of a second.
pub const TICK_PERIOD: Duration = Duration::from_millis(10);

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running tick task. Dropping it cancels the task and discards
/// any ticks that were delivered but not drained.
#[derive(Debug)]
pub struct TickSource {
    rx: mpsc::UnboundedReceiver<()>,
    task: JoinHandle<()>,
}

impl TickSource {
    /// Spawn the tick task on the current tokio runtime.
    ///
    /// The first tick fires one full period after spawning. Late wakeups
    /// deliver every missed tick in a burst so no period is lost.
    #[must_use]
    pub fn spawn(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        let (tx, rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                ticks.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });

        Self { rx, task }
    }

    /// Count and consume every tick delivered so far. Never blocks.
    pub fn drain(&mut self) -> u64 {
        let mut count = 0;
        while self.rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.rx.close();
        self.task.abort();
    }
}
