// SPDX-License-Identifier: MPL-2.0
//! Repeating timer port definition.

use std::fmt;
use std::time::Duration;

/// Handle of one started timer.
///
/// Ids are never reused by a scheduler, so a tick carrying an id that is no
/// longer active can be recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Port for scheduling repeating ticks.
///
/// A started timer fires every `interval` until cancelled. How a tick reaches
/// the session (channel, event queue, ...) is up to the adapter; it must carry
/// the [`TimerId`] returned by [`start`](TimerScheduler::start).
pub trait TimerScheduler {
    /// Starts a repeating timer. The first tick fires one `interval` from now.
    fn start(&mut self, interval: Duration) -> TimerId;

    /// Cancels a timer. Cancelling an unknown or already cancelled id is a no-op.
    fn cancel(&mut self, id: TimerId);
}
