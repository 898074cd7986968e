//! The snapshot sequence and the continuation rule.

use crate::edit::{classify_edit, EditKind};
use crate::snapshot::Snapshot;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Configuration for the version tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// How long a run of same-direction edits keeps collapsing into the most
    /// recent snapshot, in seconds.
    pub continuation_window_secs: u32,

    /// Maximum number of snapshots to retain (`None` = unlimited). When a
    /// freshly appended snapshot pushes the sequence over the cap, the oldest
    /// entries are dropped. A cap below 1 is treated as 1: the sequence never
    /// becomes empty once the first edit has occurred.
    pub max_snapshots: Option<usize>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            continuation_window_secs: 3 * 60,
            max_snapshots: None,
        }
    }
}

impl HistoryConfig {
    fn continuation_window(&self) -> Duration {
        Duration::seconds(i64::from(self.continuation_window_secs))
    }
}

/// What [`VersionHistory::record`] did with an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new snapshot was appended at the tail.
    Appended,
    /// The tail snapshot was replaced in place (run continued).
    Replaced,
    /// The text was unchanged; the sequence was left alone.
    Skipped,
}

impl RecordOutcome {
    /// Whether the sequence changed and needs to be persisted.
    pub fn changed(&self) -> bool {
        !matches!(self, RecordOutcome::Skipped)
    }
}

/// An ordered sequence of snapshots plus the edit-direction state carried
/// between changes.
///
/// Snapshots are kept in chronological ascending order: the tail is the most
/// recent entry and the only one eligible for in-place replacement. The last
/// edit direction is deliberately not serialized - a reloaded session starts
/// a fresh run rather than continuing one from before the restart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionHistory {
    snapshots: Vec<Snapshot>,

    #[serde(skip)]
    last_edit: EditKind,
}

impl VersionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from previously persisted snapshots.
    pub fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        Self {
            snapshots,
            last_edit: EditKind::None,
        }
    }

    /// The snapshot sequence, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The most recent snapshot, if any.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no edit has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The direction of the last recorded edit.
    pub fn last_edit(&self) -> EditKind {
        self.last_edit
    }

    /// Drop all snapshots and reset the edit-direction state.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.last_edit = EditKind::None;
    }

    /// Record the full editor content after an edit.
    ///
    /// Classifies the change against the most recent snapshot and either
    /// replaces that snapshot in place, appends a new one, or leaves the
    /// sequence untouched:
    /// - the first edit ever seeds the sequence without classification;
    /// - a no-op change (identical text) is skipped and does not disturb the
    ///   current run;
    /// - an insert or delete matching the direction of the previous edit,
    ///   arriving while the tail snapshot is younger than the continuation
    ///   window, replaces the tail;
    /// - everything else (direction switch, mixed edit, expired window)
    ///   appends.
    pub fn record(
        &mut self,
        new_text: &str,
        now: DateTime<Utc>,
        config: &HistoryConfig,
    ) -> RecordOutcome {
        let (kind, within_window) = match self.snapshots.last() {
            None => {
                // First snapshot: nothing to diff against
                self.snapshots.push(Snapshot::new(new_text, now));
                self.last_edit = EditKind::Insert;
                return RecordOutcome::Appended;
            }
            Some(anchor) => (
                classify_edit(&anchor.text, new_text),
                now.signed_duration_since(anchor.timestamp) < config.continuation_window(),
            ),
        };

        if kind == EditKind::None {
            // The early return leaves last_edit untouched: a no-op save in
            // the middle of a run must not end the run.
            return RecordOutcome::Skipped;
        }

        let snapshot = Snapshot::new(new_text, now);

        let outcome = if self.last_edit == kind && kind != EditKind::Mixture && within_window {
            if let Some(tail) = self.snapshots.last_mut() {
                *tail = snapshot;
            }
            RecordOutcome::Replaced
        } else {
            self.snapshots.push(snapshot);
            if let Some(cap) = config.max_snapshots {
                // The sequence always retains at least the snapshot just
                // appended, whatever the cap says.
                let cap = cap.max(1);
                if self.snapshots.len() > cap {
                    let excess = self.snapshots.len() - cap;
                    self.snapshots.drain(..excess);
                }
            }
            RecordOutcome::Appended
        };

        self.last_edit = kind;
        outcome
    }
}
