// SPDX-License-Identifier: MPL-2.0
//! Capture backend port definition.
//!
//! | Method | Request |
//! |---|---|
//! | [`summary`](CaptureBackend::summary) | `GET /api/summary` |
//! | [`group_summary`](CaptureBackend::group_summary) | `GET /api/group_summary?filename=<group_key>` |
//! | [`image`](CaptureBackend::image) | `GET /api/image?filename=<name>` |
//! | [`delete_group`](CaptureBackend::delete_group) | `GET /api/delete_group?filename=<name>` |
//! | [`metadata_refresh`](CaptureBackend::metadata_refresh) | `GET /api/metadata_refresh` |

use crate::catalog::Hierarchy;
use crate::error::BackendError;

/// Port for the capture server.
///
/// Every method either yields the decoded response or a [`BackendError`];
/// implementations never retry on their own.
// Single-threaded session: futures are never sent across threads.
#[allow(async_fn_in_trait)]
pub trait CaptureBackend {
    /// Fetches the complete day/group hierarchy.
    async fn summary(&self) -> Result<Hierarchy, BackendError>;

    /// Fetches the ordered filenames of the group addressed by `group_key`.
    async fn group_summary(&self, group_key: &str) -> Result<Vec<String>, BackendError>;

    /// Fetches the bytes of one image.
    async fn image(&self, filename: &str) -> Result<Vec<u8>, BackendError>;

    /// Deletes every file of the group owning `filename`.
    async fn delete_group(&self, filename: &str) -> Result<(), BackendError>;

    /// Asks the server to rescan its capture directory.
    async fn metadata_refresh(&self) -> Result<(), BackendError>;
}
