// SPDX-License-Identifier: MPL-2.0
//! Top-level messages consumed by `Viewer::update`.

use crate::application::port::TimerId;
use crate::application::query::ScrubPosition;
use crate::application::Confirmation;
use crate::playback::PlaybackInterval;

/// User input and timer events, handled one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Fetch the day/group hierarchy.
    LoadHierarchy,
    /// Open the group with this backend key.
    SelectGroup(String),
    /// Click on the displayed image: back to the first image of the group.
    RestartGroup,
    /// Manual navigation by `offset` images.
    Step(i64),
    /// Click on the progress indicator.
    Scrub(ScrubPosition),
    /// The auto-advance toggle changed.
    SetAutoAdvance(bool),
    /// The interval input changed.
    SetInterval(PlaybackInterval),
    /// The "show mask images" toggle changed.
    SetMaskVisibility(bool),
    /// A playback timer fired.
    Tick(TimerId),
    /// Rescan the backend and reload the hierarchy.
    Refresh,
    /// Delete the open group, with the user's answer to the prompt.
    DeleteCurrentGroup(Confirmation),
}
