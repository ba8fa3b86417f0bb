// SPDX-License-Identifier: MPL-2.0
//! Decoding of capture filenames.
//!
//! Cameras name their captures `<camera>_<group>-<yyyymmddHHMMSS>-<seq>.jpg`,
//! optionally below a dated directory, e.g.
//! `20200830/02/CAM1_02-20200830171635-01.jpg`.

use chrono::NaiveDateTime;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Fields decoded from a capture filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureName {
    /// Camera group number.
    pub group: String,
    pub captured_at: NaiveDateTime,
    /// Sequence number within the capture burst.
    pub sequence: String,
}

impl CaptureName {
    /// Decodes a capture filename.
    ///
    /// `-`, `_` and `.` all separate fields. Returns `None` for names with
    /// fewer than four fields or whose third field is not a timestamp.
    pub fn parse(filename: &str) -> Option<Self> {
        let name = filename.rsplit('/').next().unwrap_or(filename);
        let parts: Vec<&str> = name.split(['-', '_', '.']).collect();
        if parts.len() < 4 {
            return None;
        }
        let captured_at = NaiveDateTime::parse_from_str(parts[2], TIMESTAMP_FORMAT).ok()?;
        Some(Self {
            group: parts[1].to_string(),
            captured_at,
            sequence: parts[3].to_string(),
        })
    }
}
