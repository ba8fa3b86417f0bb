// SPDX-License-Identifier: MPL-2.0
//! Hierarchy loading and backend-side mutations.
//!
//! [`MetadataStore`] owns the last fetched [`Hierarchy`] and is the only
//! component talking to the [`CaptureBackend`]. It never touches the
//! selection: callers decide what to do with the lists it returns.

use crate::application::port::CaptureBackend;
use crate::catalog::{Group, Hierarchy};
use crate::error::Result;
use crate::media::{ImageList, MaskFilter};

/// Answer to the "Are you sure?" prompt preceding a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Result of a deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The group was deleted and the hierarchy reloaded.
    Deleted,
    /// The user declined; nothing was sent.
    Declined,
}

/// Day/group hierarchy and the backend it is loaded from.
#[derive(Debug)]
pub struct MetadataStore<B> {
    backend: B,
    hierarchy: Hierarchy,
}

impl<B: CaptureBackend> MetadataStore<B> {
    /// Creates a store with an empty hierarchy. Nothing is fetched yet.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            hierarchy: Hierarchy::default(),
        }
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetches the hierarchy and replaces the one held.
    ///
    /// On failure the previous hierarchy is kept.
    pub async fn load_hierarchy(&mut self) -> Result<&Hierarchy> {
        let hierarchy = self.backend.summary().await?;
        log::info!(
            "Loaded {} days, {} groups",
            hierarchy.days().len(),
            hierarchy.group_count()
        );
        self.hierarchy = hierarchy;
        Ok(&self.hierarchy)
    }

    /// Fetches a group's filenames and applies the mask filter.
    pub async fn load_group_images(&self, group: &Group, filter: MaskFilter) -> Result<ImageList> {
        let listing = self.backend.group_summary(group.key()).await?;
        let total = listing.len();
        let images = ImageList::from_listing(listing, filter);
        log::debug!(
            "Group {}: {} of {} images kept",
            group.id(),
            images.len(),
            total
        );
        Ok(images)
    }

    /// Has the backend rescan its captures, then reloads the hierarchy.
    pub async fn refresh(&mut self) -> Result<&Hierarchy> {
        self.backend.metadata_refresh().await?;
        log::info!("Backend metadata refreshed");
        self.load_hierarchy().await
    }

    /// Deletes `group` on the backend and refreshes.
    ///
    /// The group is addressed by its own key, which the backend resolves to
    /// every file of the group. A declined confirmation sends nothing.
    pub async fn delete_group(
        &mut self,
        group: &Group,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome> {
        if confirmation == Confirmation::Declined {
            log::debug!("Deletion of group {} declined", group.id());
            return Ok(DeleteOutcome::Declined);
        }
        self.backend.delete_group(group.key()).await?;
        log::info!("Deleted group {} ({})", group.id(), group.key());
        self.refresh().await?;
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Day;
    use crate::error::{BackendError, Error};
    use std::cell::RefCell;

    #[derive(Default)]
    struct ScriptedBackend {
        hierarchy: Option<Hierarchy>,
        listing: Option<Vec<String>>,
        fail_refresh: bool,
        calls: RefCell<Vec<String>>,
    }

    impl CaptureBackend for ScriptedBackend {
        async fn summary(&self) -> std::result::Result<Hierarchy, BackendError> {
            self.calls.borrow_mut().push("summary".into());
            self.hierarchy.clone().ok_or(BackendError::Status(500))
        }

        async fn group_summary(&self, key: &str) -> std::result::Result<Vec<String>, BackendError> {
            self.calls.borrow_mut().push(format!("group_summary {key}"));
            self.listing
                .clone()
                .ok_or_else(|| BackendError::Transport("connection refused".into()))
        }

        async fn image(&self, _filename: &str) -> std::result::Result<Vec<u8>, BackendError> {
            Ok(Vec::new())
        }

        async fn delete_group(&self, filename: &str) -> std::result::Result<(), BackendError> {
            self.calls.borrow_mut().push(format!("delete_group {filename}"));
            Ok(())
        }

        async fn metadata_refresh(&self) -> std::result::Result<(), BackendError> {
            self.calls.borrow_mut().push("metadata_refresh".into());
            if self.fail_refresh {
                Err(BackendError::Status(503))
            } else {
                Ok(())
            }
        }
    }

    fn sample_hierarchy() -> Hierarchy {
        Hierarchy::new(vec![Day::new(
            "2024-01-01",
            vec![Group::new("g1", "k1"), Group::new("g2", "k2")],
        )])
    }

    #[tokio::test]
    async fn load_hierarchy_replaces_previous() {
        let backend = ScriptedBackend {
            hierarchy: Some(sample_hierarchy()),
            ..Default::default()
        };
        let mut store = MetadataStore::new(backend);

        let hierarchy = store.load_hierarchy().await.expect("load succeeds");
        assert_eq!(hierarchy.group_count(), 2);
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_hierarchy() {
        let mut store = MetadataStore::new(ScriptedBackend {
            hierarchy: Some(sample_hierarchy()),
            ..Default::default()
        });
        store.load_hierarchy().await.expect("first load succeeds");
        store.backend.hierarchy = None;

        let err = store.load_hierarchy().await.expect_err("second load fails");
        assert_eq!(err, Error::Backend(BackendError::Status(500)));
        assert_eq!(store.hierarchy().group_count(), 2);
    }

    #[tokio::test]
    async fn group_images_are_filtered() {
        let store = MetadataStore::new(ScriptedBackend {
            listing: Some(vec!["a.jpg".into(), "am.jpg".into(), "b.jpg".into()]),
            ..Default::default()
        });
        let group = Group::new("g1", "k1");

        let hidden = store
            .load_group_images(&group, MaskFilter::HideMasks)
            .await
            .expect("load succeeds");
        let shown = store
            .load_group_images(&group, MaskFilter::ShowMasks)
            .await
            .expect("load succeeds");

        assert_eq!(hidden.iter().collect::<Vec<_>>(), ["a.jpg", "b.jpg"]);
        assert_eq!(shown.len(), 3);
        assert_eq!(store.backend.calls.borrow()[0], "group_summary k1");
    }

    #[tokio::test]
    async fn refresh_rescans_before_reloading() {
        let mut store = MetadataStore::new(ScriptedBackend {
            hierarchy: Some(sample_hierarchy()),
            ..Default::default()
        });
        store.refresh().await.expect("refresh succeeds");
        assert_eq!(
            *store.backend.calls.borrow(),
            ["metadata_refresh", "summary"]
        );
    }

    #[tokio::test]
    async fn failed_rescan_skips_reload() {
        let mut store = MetadataStore::new(ScriptedBackend {
            hierarchy: Some(sample_hierarchy()),
            fail_refresh: true,
            ..Default::default()
        });
        assert!(store.refresh().await.is_err());
        assert_eq!(*store.backend.calls.borrow(), ["metadata_refresh"]);
        assert!(store.hierarchy().is_empty());
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let mut store = MetadataStore::new(ScriptedBackend {
            hierarchy: Some(sample_hierarchy()),
            ..Default::default()
        });
        let outcome = store
            .delete_group(&Group::new("g1", "k1"), Confirmation::Declined)
            .await
            .expect("declining never fails");
        assert_eq!(outcome, DeleteOutcome::Declined);
        assert!(store.backend.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_uses_group_key_then_refreshes() {
        let mut store = MetadataStore::new(ScriptedBackend {
            hierarchy: Some(sample_hierarchy()),
            ..Default::default()
        });
        let outcome = store
            .delete_group(&Group::new("g2", "k2"), Confirmation::from(true))
            .await
            .expect("delete succeeds");
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            *store.backend.calls.borrow(),
            ["delete_group k2", "metadata_refresh", "summary"]
        );
    }
}
