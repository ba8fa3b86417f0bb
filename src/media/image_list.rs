// SPDX-License-Identifier: MPL-2.0
//! Ordered image filenames of the selected group.

use super::filter::MaskFilter;

/// Filenames of one group, in backend order, after mask filtering.
///
/// Built once per load; a change of [`MaskFilter`] only shows up in the next
/// list built from a fresh group listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList {
    filenames: Vec<String>,
}

impl ImageList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the list from a raw group listing.
    pub fn from_listing(listing: Vec<String>, filter: MaskFilter) -> Self {
        let filenames = listing
            .into_iter()
            .filter(|name| filter.matches(name))
            .collect();
        Self { filenames }
    }

    pub fn len(&self) -> usize {
        self.filenames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filenames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.filenames.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.filenames.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for ImageList {
    fn from(filenames: Vec<String>) -> Self {
        Self { filenames }
    }
}
