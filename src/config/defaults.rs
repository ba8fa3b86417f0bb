// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Backend**: Capture server location
//! - **Playback**: Auto-advance interval and bounds
//! - **Masks**: Mask image naming convention

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Capture server used when neither the settings file nor the command line
/// names one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8090/";

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default delay between two automatically advanced images (in milliseconds).
pub const DEFAULT_INTERVAL_MS: u64 = 1_000;

/// Shortest accepted auto-advance interval (in milliseconds).
pub const MIN_INTERVAL_MS: u64 = 10;

/// Longest accepted auto-advance interval (one hour, in milliseconds).
pub const MAX_INTERVAL_MS: u64 = 3_600_000;

/// Auto-advance is on until the user turns it off.
pub const DEFAULT_AUTO_ADVANCE: bool = true;

// ==========================================================================
// Mask Defaults
// ==========================================================================

/// Filename ending that marks a mask image (`m` marker before `.jpg`).
pub const MASK_SUFFIX: &str = "m.jpg";

/// Mask images are hidden from playback by default.
pub const DEFAULT_SHOW_MASK_IMAGES: bool = false;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_INTERVAL_MS > 0);
    assert!(MAX_INTERVAL_MS > MIN_INTERVAL_MS);
    assert!(DEFAULT_INTERVAL_MS >= MIN_INTERVAL_MS);
    assert!(DEFAULT_INTERVAL_MS <= MAX_INTERVAL_MS);
    assert!(!MASK_SUFFIX.is_empty());
};
