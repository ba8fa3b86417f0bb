// SPDX-License-Identifier: MPL-2.0
//! Navigation services over the current image list.
//!
//! # Available Services
//!
//! - [`selection`]: The selected group, its image list and index (`SelectionState`)
//! - [`scrub`]: Pointer position to index mapping (`ScrubPosition`)
//!
//! # Design Notes
//!
//! Neither service performs I/O. Image lists are fetched by the
//! [`MetadataStore`](crate::application::MetadataStore) and handed over whole,
//! so a failed fetch never leaves a half-updated selection behind.

pub mod scrub;
pub mod selection;

// Re-export main types
pub use scrub::ScrubPosition;
pub use selection::{SelectionSnapshot, SelectionState};
