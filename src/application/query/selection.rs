// SPDX-License-Identifier: MPL-2.0
//! Selection state: which group is open and which of its images is shown.
//!
//! [`SelectionState`] is the single source of truth for "what is shown now".
//! It is created empty, filled by the first group selection and then only
//! mutated through its operations, so the image list and index are always
//! read and written together.

use super::scrub::ScrubPosition;
use crate::catalog::{CaptureName, Group};
use crate::media::{ImageList, MaskFilter};
use chrono::NaiveDateTime;

/// Currently selected group, its image list and the shown index.
///
/// # Invariants
///
/// - When the image list is non-empty, `index < images.len()`.
/// - Selecting a group always resets the index to 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    group: Option<Group>,
    images: ImageList,
    index: usize,
    /// Filter applied to the next group listing.
    filter: MaskFilter,
    /// Set by a `step` that hit either end of the list.
    no_further_images: bool,
}

impl SelectionState {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty selection with the given mask visibility.
    #[must_use]
    pub fn with_mask_visibility(mask_visible: bool) -> Self {
        Self {
            filter: MaskFilter::from_visibility(mask_visible),
            ..Self::default()
        }
    }

    /// Opens a group with its already filtered image list, at index 0.
    pub fn select_group(&mut self, group: Group, images: ImageList) {
        log::debug!(
            "Selected group {} ({} images)",
            group.id(),
            images.len()
        );
        self.group = Some(group);
        self.images = images;
        self.index = 0;
        self.no_further_images = false;
    }

    /// Goes back to the first image of the open group.
    pub fn restart(&mut self) {
        self.index = 0;
        self.no_further_images = false;
    }

    /// Drops the open group, e.g. after it was deleted on the backend.
    pub fn clear(&mut self) {
        self.group = None;
        self.images = ImageList::new();
        self.index = 0;
        self.no_further_images = false;
    }

    /// Sets mask visibility for the next group selection.
    ///
    /// The list that is already loaded is not filtered again.
    pub fn set_filter(&mut self, mask_visible: bool) {
        self.filter = MaskFilter::from_visibility(mask_visible);
    }

    /// Filter the next group listing must be derived with.
    #[must_use]
    pub fn filter(&self) -> MaskFilter {
        self.filter
    }

    /// Moves the index by `offset`.
    ///
    /// Returns `false` and leaves the index untouched if the target falls
    /// outside the list; the "no further images" notice is raised instead.
    /// Both auto-advance and manual navigation go through here.
    pub fn step(&mut self, offset: i64) -> bool {
        let Some(candidate) = (self.index as i64).checked_add(offset) else {
            self.no_further_images = true;
            return false;
        };
        if candidate < 0 || candidate >= self.images.len() as i64 {
            self.no_further_images = true;
            return false;
        }
        self.index = candidate as usize;
        self.no_further_images = false;
        true
    }

    /// Jumps to `index`, clamped to the last image.
    ///
    /// Returns `false` without changes when the list is empty.
    pub fn seek(&mut self, index: usize) -> bool {
        if self.images.is_empty() {
            return false;
        }
        self.index = index.min(self.images.len() - 1);
        self.no_further_images = false;
        true
    }

    /// Jumps to the image under a pointer position on the progress indicator.
    pub fn scrub(&mut self, position: ScrubPosition) -> bool {
        match position.target_index(self.images.len()) {
            Some(index) => self.seek(index),
            None => false,
        }
    }

    #[must_use]
    pub fn group(&self) -> Option<&Group> {
        self.group.as_ref()
    }

    #[must_use]
    pub fn images(&self) -> &ImageList {
        &self.images
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Filename at the current index, if any.
    #[must_use]
    pub fn current_filename(&self) -> Option<&str> {
        self.images.get(self.index)
    }

    #[must_use]
    pub fn no_further_images(&self) -> bool {
        self.no_further_images
    }

    /// Immutable view for renderers. `None` until a group is selected.
    #[must_use]
    pub fn snapshot(&self) -> Option<SelectionSnapshot> {
        let group = self.group.as_ref()?;
        let filename = self.current_filename().map(str::to_string);
        let captured_at = filename
            .as_deref()
            .and_then(CaptureName::parse)
            .map(|name| name.captured_at);
        Some(SelectionSnapshot {
            group_id: group.id().to_string(),
            group_key: group.key().to_string(),
            filename,
            index: self.index,
            len: self.images.len(),
            captured_at,
            no_further_images: self.no_further_images,
        })
    }
}

/// What a renderer needs to paint the current image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub group_id: String,
    pub group_key: String,
    /// `None` when the group has no image left after filtering.
    pub filename: Option<String>,
    pub index: usize,
    pub len: usize,
    /// Capture time decoded from the filename.
    pub captured_at: Option<NaiveDateTime>,
    pub no_further_images: bool,
}

impl SelectionSnapshot {
    /// Caption such as `17:15:49 (2/12)`.
    #[must_use]
    pub fn description(&self) -> String {
        let position = if self.len == 0 { 0 } else { self.index + 1 };
        format!("{} ({}/{})", self.group_id, position, self.len)
    }

    /// Progress through the list, `round((index + 1) / len * 100)`.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.len == 0 {
            return 0;
        }
        let percent = ((self.index + 1) as f64 / self.len as f64 * 100.0).round();
        percent.clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> ImageList {
        ImageList::from(names.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    fn selected(names: &[&str]) -> SelectionState {
        let mut state = SelectionState::new();
        state.select_group(Group::new("g1", "k1"), list(names));
        state
    }

    #[test]
    fn new_selection_is_empty() {
        let state = SelectionState::new();
        assert!(state.group().is_none());
        assert!(state.is_empty());
        assert_eq!(state.current_filename(), None);
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn step_forward_then_back_returns_to_start() {
        let mut state = selected(&["a.jpg", "b.jpg", "c.jpg"]);
        state.seek(1);
        assert!(state.step(1));
        assert!(state.step(-1));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn step_before_first_is_blocked() {
        let mut state = selected(&["a.jpg", "b.jpg"]);
        assert!(!state.step(-1));
        assert_eq!(state.index(), 0);
        assert!(state.no_further_images());
    }

    #[test]
    fn step_after_last_is_blocked() {
        let mut state = selected(&["a.jpg", "b.jpg"]);
        assert!(state.step(1));
        assert!(!state.step(1));
        assert_eq!(state.index(), 1);
        assert!(state.no_further_images());
    }

    #[test]
    fn extreme_offsets_are_blocked() {
        let mut state = selected(&["a.jpg", "b.jpg"]);
        assert!(state.step(1));

        assert!(!state.step(i64::MAX));
        assert_eq!(state.index(), 1);
        assert!(state.no_further_images());

        assert!(!state.step(i64::MIN));
        assert_eq!(state.index(), 1);
        assert!(state.no_further_images());
    }

    #[test]
    fn successful_step_clears_notice() {
        let mut state = selected(&["a.jpg", "b.jpg"]);
        assert!(!state.step(-1));
        assert!(state.step(1));
        assert!(!state.no_further_images());
    }

    #[test]
    fn step_on_empty_list_is_blocked() {
        let mut state = selected(&[]);
        assert!(!state.step(1));
        assert!(!state.step(0));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn select_group_resets_index() {
        let mut state = selected(&["a.jpg", "b.jpg", "c.jpg"]);
        state.seek(2);
        state.select_group(Group::new("g2", "k2"), list(&["x.jpg", "y.jpg"]));
        assert_eq!(state.index(), 0);
        assert_eq!(state.group().map(Group::key), Some("k2"));
        assert_eq!(state.current_filename(), Some("x.jpg"));
    }

    #[test]
    fn seek_clamps_to_last_image() {
        let mut state = selected(&["a.jpg", "b.jpg", "c.jpg"]);
        assert!(state.seek(99));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn seek_on_empty_list_is_a_no_op() {
        let mut state = selected(&[]);
        assert!(!state.seek(0));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn filter_change_is_not_retroactive() {
        let mut state = selected(&["a.jpg", "am.jpg"]);
        state.set_filter(false);
        assert_eq!(state.len(), 2);
        assert_eq!(state.filter(), MaskFilter::HideMasks);
        state.set_filter(true);
        assert_eq!(state.filter(), MaskFilter::ShowMasks);
    }

    #[test]
    fn restart_returns_to_first_image() {
        let mut state = selected(&["a.jpg", "b.jpg"]);
        state.step(1);
        state.restart();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn clear_drops_group_and_images() {
        let mut state = selected(&["a.jpg"]);
        state.clear();
        assert!(state.group().is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn snapshot_carries_caption_and_progress() {
        let mut state = selected(&[
            "CAM1_01-20200830171549-00.jpg",
            "CAM1_01-20200830171550-01.jpg",
            "CAM1_01-20200830171551-02.jpg",
        ]);
        state.step(1);
        let snapshot = state.snapshot().expect("group selected");

        assert_eq!(snapshot.description(), "g1 (2/3)");
        assert_eq!(snapshot.progress_percent(), 67);
        assert_eq!(
            snapshot.filename.as_deref(),
            Some("CAM1_01-20200830171550-01.jpg")
        );
        assert_eq!(
            snapshot.captured_at.map(|t| t.format("%H:%M:%S").to_string()),
            Some("17:15:50".to_string())
        );
    }

    #[test]
    fn snapshot_of_empty_group_has_no_filename() {
        let snapshot = selected(&[]).snapshot().expect("group selected");
        assert_eq!(snapshot.filename, None);
        assert_eq!(snapshot.description(), "g1 (0/0)");
        assert_eq!(snapshot.progress_percent(), 0);
    }
}
