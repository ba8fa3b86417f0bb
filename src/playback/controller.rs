// SPDX-License-Identifier: MPL-2.0
//! Auto-advance state machine.
//!
//! Manages the lifecycle of timed playback with two states:
//! - Idle: No timer running
//! - Running: One repeating timer active, with the interval captured at start
//!
//! Each tick re-reads the live [`PlaybackConfig`]. A changed interval restarts
//! the timer (without advancing), a disabled toggle or the end of the list
//! stops it, anything else advances the selection by one image.

use super::{PlaybackConfig, PlaybackInterval};
use crate::application::port::{TimerId, TimerScheduler};
use crate::application::query::SelectionState;

/// Playback state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No timer running.
    #[default]
    Idle,

    /// A timer is ticking every `interval`.
    Running {
        interval: PlaybackInterval,
        timer: TimerId,
    },
}

impl PlaybackState {
    /// Returns true if a timer session is active.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Interval captured when the current session started.
    pub fn interval(&self) -> Option<PlaybackInterval> {
        match self {
            Self::Running { interval, .. } => Some(*interval),
            Self::Idle => None,
        }
    }
}

/// Why a running session ended on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The auto-advance toggle was off.
    Disabled,
    /// `step(+1)` was refused at the last image.
    EndOfList,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belongs to a cancelled session and was ignored.
    Stale,
    /// The selection moved to `index`.
    Advanced { index: usize },
    /// The live interval differed; a new timer was started, nothing advanced.
    Restarted { interval: PlaybackInterval },
    /// The session ended and every timer was cancelled.
    Stopped(StopReason),
}

/// Timer-driven auto-advance over a [`SelectionState`].
///
/// At most one timer session is logically active. Every handle ever started
/// and not yet cancelled is tracked, and [`stop`](Self::stop) cancels all of
/// them, so stopping is idempotent and always leaves zero pending timers.
#[derive(Debug, Default)]
pub struct PlaybackController {
    state: PlaybackState,
    timers: Vec<TimerId>,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Number of timer handles started and not yet cancelled.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// (Re)starts a session if playback is enabled.
    ///
    /// Any previous session is cancelled first. Returns `true` if a timer
    /// is running afterwards.
    pub fn start(&mut self, config: &PlaybackConfig, scheduler: &mut impl TimerScheduler) -> bool {
        self.stop(scheduler);
        if !config.enabled {
            return false;
        }
        let timer = scheduler.start(config.interval.as_duration());
        self.timers.push(timer);
        self.state = PlaybackState::Running {
            interval: config.interval,
            timer,
        };
        log::debug!("Playback started with {} ({})", config.interval, timer);
        true
    }

    /// Cancels every pending timer and returns to idle.
    pub fn stop(&mut self, scheduler: &mut impl TimerScheduler) {
        while let Some(timer) = self.timers.pop() {
            scheduler.cancel(timer);
        }
        if self.state.is_running() {
            log::debug!("Playback stopped");
        }
        self.state = PlaybackState::Idle;
    }

    /// Applies a change of the playback inputs right away.
    ///
    /// A running session restarts once when the interval changed and stops
    /// when playback was disabled. An idle controller is left alone; enabling
    /// playback goes through [`start`](Self::start). Returns `true` on restart.
    pub fn reconfigure(
        &mut self,
        config: &PlaybackConfig,
        scheduler: &mut impl TimerScheduler,
    ) -> bool {
        let PlaybackState::Running { interval, .. } = self.state else {
            return false;
        };
        if !config.enabled {
            self.stop(scheduler);
            return false;
        }
        if interval == config.interval {
            return false;
        }
        log::debug!("Interval changed {} -> {}", interval, config.interval);
        self.start(config, scheduler)
    }

    /// Handles one tick of timer `id` against the live `config`.
    pub fn on_tick(
        &mut self,
        id: TimerId,
        config: &PlaybackConfig,
        selection: &mut SelectionState,
        scheduler: &mut impl TimerScheduler,
    ) -> TickOutcome {
        let PlaybackState::Running { interval, timer } = self.state else {
            return TickOutcome::Stale;
        };
        if timer != id {
            log::debug!("Ignoring stale tick from {}", id);
            return TickOutcome::Stale;
        }

        if interval != config.interval {
            log::debug!("Interval changed {} -> {}", interval, config.interval);
            return if self.start(config, scheduler) {
                TickOutcome::Restarted {
                    interval: config.interval,
                }
            } else {
                TickOutcome::Stopped(StopReason::Disabled)
            };
        }

        if !config.enabled {
            self.stop(scheduler);
            return TickOutcome::Stopped(StopReason::Disabled);
        }

        if !selection.step(1) {
            self.stop(scheduler);
            return TickOutcome::Stopped(StopReason::EndOfList);
        }

        TickOutcome::Advanced {
            index: selection.index(),
        }
    }
}
