// SPDX-License-Identifier: MPL-2.0
//! Timed auto-advance through the selected group.

mod controller;
mod interval;

pub use controller::{PlaybackController, PlaybackState, StopReason, TickOutcome};
pub use interval::PlaybackInterval;

/// Live playback inputs.
///
/// Owned by whoever holds the user controls; the controller only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackConfig {
    /// The "auto-advance" toggle.
    pub enabled: bool,
    pub interval: PlaybackInterval,
}
