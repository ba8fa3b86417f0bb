// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//!
//! # Available Ports
//!
//! - [`backend`]: Capture server requests (hierarchy, listings, images, deletion)
//! - [`timer`]: Repeating timers driving auto-advance
//! - [`renderer`]: Painting the hierarchy and the current image
//!
//! # Design Notes
//!
//! - Everything runs on one thread: no port requires `Send` or `Sync`
//! - Backend methods are `async`; timers and renderers are synchronous
//! - Timers never call back into the session directly, they report ticks
//!   by [`TimerId`](timer::TimerId) so stale ticks can be told apart

pub mod backend;
pub mod renderer;
pub mod timer;

pub use backend::CaptureBackend;
pub use renderer::Renderer;
pub use timer::{TimerId, TimerScheduler};
