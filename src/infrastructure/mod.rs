// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Capture server access via `reqwest` (implements [`CaptureBackend`])
//! - [`timer`]: Repeating timers on the tokio runtime (implements [`TimerScheduler`])
//!
//! [`CaptureBackend`]: crate::application::port::CaptureBackend
//! [`TimerScheduler`]: crate::application::port::TimerScheduler

pub mod http;
pub mod timer;

// Re-export main types for convenience
pub use http::HttpBackend;
pub use timer::TokioTimers;
