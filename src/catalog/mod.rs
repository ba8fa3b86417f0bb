// SPDX-License-Identifier: MPL-2.0
//! Day and group hierarchy of the capture archive.
//!
//! The backend summarises its archive as an ordered list of days, each holding
//! an ordered list of groups. On the wire both levels are JSON arrays rather
//! than objects:
//!
//! ```json
//! [["2020-08-30", [["17:15:49", "CAM1_01-20200830171549-00.jpg"]]]]
//! ```
//!
//! A group is addressed by its key, a representative filename the backend
//! resolves back to the whole group.

mod capture_name;

pub use capture_name::CaptureName;

use serde::{Deserialize, Serialize};

/// A named collection of related images within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Group {
    id: String,
    key: String,
}

impl Group {
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
        }
    }

    /// Display identifier (the capture time of the group's first image).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Filename used to look the group up on the backend.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl From<(String, String)> for Group {
    fn from((id, key): (String, String)) -> Self {
        Self { id, key }
    }
}

impl From<Group> for (String, String) {
    fn from(group: Group) -> Self {
        (group.id, group.key)
    }
}

/// A dated collection of groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<Group>)", into = "(String, Vec<Group>)")]
pub struct Day {
    id: String,
    groups: Vec<Group>,
}

impl Day {
    pub fn new(id: impl Into<String>, groups: Vec<Group>) -> Self {
        Self {
            id: id.into(),
            groups,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
}

impl From<(String, Vec<Group>)> for Day {
    fn from((id, groups): (String, Vec<Group>)) -> Self {
        Self { id, groups }
    }
}

impl From<Day> for (String, Vec<Group>) {
    fn from(day: Day) -> Self {
        (day.id, day.groups)
    }
}

/// The complete day/group tree as last fetched from the backend.
///
/// Never edited in place: a refresh replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hierarchy {
    days: Vec<Day>,
}

impl Hierarchy {
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates every group in display order, paired with its day.
    pub fn groups(&self) -> impl Iterator<Item = (&Day, &Group)> {
        self.days
            .iter()
            .flat_map(|day| day.groups.iter().map(move |group| (day, group)))
    }

    pub fn group_count(&self) -> usize {
        self.days.iter().map(|day| day.groups.len()).sum()
    }

    /// Looks a group up by its backend key.
    ///
    /// Group ids are capture times and may repeat across days, keys do not.
    pub fn find_group(&self, key: &str) -> Option<&Group> {
        self.groups()
            .map(|(_, group)| group)
            .find(|group| group.key == key)
    }
}
