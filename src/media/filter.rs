// SPDX-License-Identifier: MPL-2.0
//! Mask image filtering for playback.
//!
//! Cameras store a "mask" variant next to some captures. A mask is recognised
//! purely by its name: the filename ends with [`MASK_SUFFIX`], i.e. an `m`
//! marker right before the `.jpg` extension. No image content is inspected.
//!
//! # Example
//!
//! ```
//! use webcam_lens::media::filter::{is_mask_image, MaskFilter};
//!
//! assert!(is_mask_image("CAM1_02-20200830171635-01m.jpg"));
//!
//! let filter = MaskFilter::HideMasks;
//! assert!(!filter.matches("CAM1_02-20200830171635-01m.jpg"));
//! assert!(filter.matches("CAM1_02-20200830171635-01.jpg"));
//! ```

use crate::config::MASK_SUFFIX;

/// Returns `true` if the filename names a mask image.
#[must_use]
pub fn is_mask_image(filename: &str) -> bool {
    filename.ends_with(MASK_SUFFIX)
}

/// Whether mask images take part in playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskFilter {
    /// Keep only regular captures.
    #[default]
    HideMasks,
    /// Keep every filename, masks included.
    ShowMasks,
}

impl MaskFilter {
    /// Filter state for the "show mask images" toggle.
    #[must_use]
    pub fn from_visibility(mask_visible: bool) -> Self {
        if mask_visible {
            Self::ShowMasks
        } else {
            Self::HideMasks
        }
    }

    #[must_use]
    pub fn masks_visible(self) -> bool {
        matches!(self, Self::ShowMasks)
    }

    /// Returns `true` if the filename is kept by this filter.
    #[must_use]
    pub fn matches(self, filename: &str) -> bool {
        match self {
            Self::ShowMasks => true,
            Self::HideMasks => !is_mask_image(filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_predicate_is_a_suffix_check() {
        assert!(is_mask_image("am.jpg"));
        assert!(is_mask_image("dir/CAM1_02-20200830171635-01m.jpg"));
        assert!(!is_mask_image("a.jpg"));
        assert!(!is_mask_image("m.png"));
        assert!(!is_mask_image("mask.jpg.bak"));
    }

    #[test]
    fn marker_must_sit_right_before_extension() {
        assert!(!is_mask_image("m_capture.jpg"));
        assert!(!is_mask_image("am.jpeg"));
    }

    #[test]
    fn hide_masks_is_default() {
        let filter = MaskFilter::default();
        assert_eq!(filter, MaskFilter::HideMasks);
        assert!(!filter.masks_visible());
    }

    #[test]
    fn show_masks_keeps_everything() {
        let filter = MaskFilter::from_visibility(true);
        assert!(filter.matches("am.jpg"));
        assert!(filter.matches("a.jpg"));
    }

    #[test]
    fn hide_masks_drops_only_masks() {
        let filter = MaskFilter::from_visibility(false);
        assert!(!filter.matches("am.jpg"));
        assert!(filter.matches("a.jpg"));
    }
}
