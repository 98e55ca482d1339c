//! Labelled confirmed-schedule snapshots for the persistence collaborator.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Course;

/// A confirmed schedule under a caller-chosen label.
///
/// Storage format is the caller's business; JSON helpers are provided for
/// convenience. Use [`super::ScheduleSession::restore`] to turn a snapshot
/// back into a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    /// Caller-supplied name ("Plan A").
    pub label: String,
    /// Confirmed courses in confirmation order.
    pub courses: Vec<Course>,
}

impl ScheduleSnapshot {
    /// Creates a snapshot.
    pub fn new(label: impl Into<String>, courses: Vec<Course>) -> Self {
        Self {
            label: label.into(),
            courses,
        }
    }

    /// Total credits in the snapshot.
    pub fn total_credits(&self) -> u32 {
        self.courses
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.credits))
    }

    /// Encodes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
