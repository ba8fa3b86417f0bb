// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Selection and scrub navigation over the current image list
//! - [`metadata_store`]: Loading the hierarchy and group listings through a backend
//!
//! # Dependency Rule
//!
//! - Application layer depends on the catalog and media types
//! - Infrastructure layer implements application layer ports
//! - The `app` session uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use webcam_lens::application::port::CaptureBackend;
//! use webcam_lens::application::query::SelectionState;
//!
//! // Infrastructure implements the port trait
//! struct HttpBackend { /* ... */ }
//! impl CaptureBackend for HttpBackend { /* ... */ }
//!
//! let selection = SelectionState::new();
//! ```

pub mod metadata_store;
pub mod port;
pub mod query;

pub use metadata_store::{Confirmation, DeleteOutcome, MetadataStore};
