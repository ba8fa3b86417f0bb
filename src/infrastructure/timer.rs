// SPDX-License-Identifier: MPL-2.0
//! Repeating timers on the tokio runtime.
//!
//! Each timer is a spawned task that sends its [`TimerId`] into a channel on
//! every tick. The session drains that channel on its own task, so ticks are
//! handled one at a time, interleaved with user input.

use crate::application::port::{TimerId, TimerScheduler};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// [`TimerScheduler`] backed by tokio tasks.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioTimers {
    ticks: mpsc::UnboundedSender<TimerId>,
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioTimers {
    /// Creates a scheduler and the receiver its ticks arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (ticks, receiver) = mpsc::unbounded_channel();
        let timers = Self {
            ticks,
            next_id: 0,
            tasks: HashMap::new(),
        };
        (timers, receiver)
    }

    /// Number of timers started and not cancelled.
    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }
}

impl TimerScheduler for TokioTimers {
    fn start(&mut self, interval: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        // tokio rejects a zero period
        let period = interval.max(Duration::from_millis(1));
        let ticks = self.ticks.clone();

        let handle = tokio::spawn(async move {
            let mut clock = tokio::time::interval_at(Instant::now() + period, period);
            clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                clock.tick().await;
                if ticks.send(id).is_err() {
                    break;
                }
            }
        });

        self.tasks.insert(id, handle);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
        }
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
