// SPDX-License-Identifier: MPL-2.0
//! `webcam_lens` browses webcam captures served by a capture server.
//!
//! Captures are organised as days holding groups of images. The crate tracks
//! which group and image are shown, advances through a group on a timer whose
//! interval can change while it runs, and maps clicks on a progress indicator
//! to image positions. Fetching and painting are delegated to the ports in
//! [`application::port`].

#![doc(html_root_url = "https://docs.rs/webcam_lens/0.3.0")]

pub mod app;
pub mod application;
pub mod catalog;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod playback;

#[cfg(test)]
mod test_utils;
