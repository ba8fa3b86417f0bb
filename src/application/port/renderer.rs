// SPDX-License-Identifier: MPL-2.0
//! Rendering port definition.
//!
//! Renderers receive immutable snapshots and are never asked for state; any
//! user input they collect goes back to the session as a message.

use crate::application::query::SelectionSnapshot;
use crate::catalog::Hierarchy;
use crate::error::Error;

/// Port for presenting the session to the user.
pub trait Renderer {
    /// Paints the day/group lists. Called after every (re)load.
    fn render_hierarchy(&mut self, hierarchy: &Hierarchy);

    /// Paints the current image, its caption and progress.
    fn render_selection(&mut self, snapshot: &SelectionSnapshot);

    /// Shows a failed operation. Session state is unchanged when this is called.
    fn render_error(&mut self, error: &Error);
}
