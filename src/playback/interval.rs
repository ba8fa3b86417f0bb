// SPDX-License-Identifier: MPL-2.0
//! Auto-advance interval domain type.
//!
//! This module provides a type-safe wrapper for the delay between two
//! automatically advanced images, ensuring it is always positive and
//! within the configured bounds.

use crate::config::{DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use std::fmt;
use std::time::Duration;

/// Auto-advance interval in milliseconds, guaranteed within bounds.
///
/// # Example
///
/// ```
/// use webcam_lens::playback::PlaybackInterval;
///
/// let interval = PlaybackInterval::new(250);
/// assert_eq!(interval.as_millis(), 250);
///
/// // Values outside range are clamped
/// let too_fast = PlaybackInterval::new(0);
/// assert_eq!(too_fast.as_millis(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackInterval(u64);

impl PlaybackInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS))
    }

    /// Parses the text of an interval input field.
    ///
    /// Returns `None` for non-numeric or non-positive input; in-range
    /// positive values are clamped like [`new`](Self::new).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let millis: i64 = input.trim().parse().ok()?;
        if millis <= 0 {
            return None;
        }
        Some(Self::new(millis as u64))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for PlaybackInterval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_MS)
    }
}

impl fmt::Display for PlaybackInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}
