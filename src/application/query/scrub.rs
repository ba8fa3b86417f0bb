// SPDX-License-Identifier: MPL-2.0
//! Scrubbing: mapping a click on the progress indicator to an image index.
//!
//! Only the pointer's horizontal position relative to the indicator's width
//! matters; the indicator's own value scale is irrelevant.

/// Pointer position on the progress indicator as a fraction of its width.
///
/// Always finite and within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubPosition(f64);

impl ScrubPosition {
    /// Creates a position from a fraction, clamping to `0.0..=1.0`.
    ///
    /// Returns `None` for NaN or infinite input.
    #[must_use]
    pub fn new(fraction: f64) -> Option<Self> {
        fraction
            .is_finite()
            .then(|| Self(fraction.clamp(0.0, 1.0)))
    }

    /// Creates a position from a pointer event's `offset_x` over the
    /// indicator's `width`. Returns `None` for a zero-width indicator.
    #[must_use]
    pub fn from_pointer(offset_x: f64, width: f64) -> Option<Self> {
        if width.is_nan() || width <= 0.0 {
            return None;
        }
        Self::new(offset_x / width)
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Image index under this position: `ceil(len * f) - 1`.
    ///
    /// The left edge maps to 0 rather than -1 and the right edge to
    /// `len - 1`. Returns `None` for an empty list.
    #[must_use]
    pub fn target_index(self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let slot = (len as f64 * self.0).ceil() as usize;
        Some(slot.saturating_sub(1).min(len - 1))
    }
}
