// SPDX-License-Identifier: MPL-2.0
//! Test doubles shared by unit tests.

use crate::application::port::{TimerId, TimerScheduler};
use std::collections::BTreeMap;
use std::time::Duration;

/// Scheduler that only records what was started and cancelled.
///
/// Ticks are delivered by the test itself, by calling the code under test
/// with one of the recorded ids.
#[derive(Debug, Default)]
pub struct ManualTimers {
    next_id: u64,
    active: BTreeMap<TimerId, Duration>,
    started: Vec<Duration>,
}

impl ManualTimers {
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Intervals of every timer ever started, in order.
    pub fn started_intervals_ms(&self) -> Vec<u64> {
        self.started.iter().map(|d| d.as_millis() as u64).collect()
    }
}

impl TimerScheduler for ManualTimers {
    fn start(&mut self, interval: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        self.active.insert(id, interval);
        self.started.push(interval);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.active.remove(&id);
    }
}
