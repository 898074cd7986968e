//! Snapshot data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full-text checkpoint of the editor content at a point in time.
///
/// Snapshots store the whole text, not a diff. A snapshot is never edited
/// after creation; continuing a run of edits swaps the sequence tail for a
/// fresh snapshot instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The complete editor content.
    pub text: String,

    /// When this snapshot was recorded.
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    /// Create a new snapshot.
    pub fn new(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            timestamp,
        }
    }

    /// Whether this snapshot holds empty content.
    ///
    /// An empty snapshot is still a valid history entry; views render it
    /// with an explicit empty marker.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
