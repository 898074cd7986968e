//! Session management.
//!
//! A session owns the version history for one editing surface: it seeds the
//! history from storage when opened, feeds every editor change through the
//! tracker, and writes the whole sequence back after each change that
//! altered it. The in-memory history is authoritative at all times; a
//! failing or absent backend degrades durability, never the session.

use crate::error::CoreResult;
use chrono::{DateTime, Utc};
use sketchpad_history::{HistoryConfig, RecordOutcome, Snapshot, VersionHistory};
use sketchpad_storage::Storage;
use tracing::{debug, warn};

/// Fixed storage key for the persisted snapshot sequence.
const HISTORY_KEY: [&str; 2] = ["sketchpad", "history"];

/// An editing session with persistent version history.
pub struct Session<S: Storage> {
    history: VersionHistory,
    config: HistoryConfig,
    storage: Option<S>,
}

impl<S: Storage> Session<S> {
    /// Open a session, seeding the history from storage.
    ///
    /// A missing record or a failed read both cold-start with an empty
    /// history; the read failure is logged and otherwise ignored. Pass
    /// `None` for a purely in-memory session.
    pub async fn open(storage: Option<S>, config: HistoryConfig) -> Self {
        let history = match &storage {
            None => VersionHistory::new(),
            Some(storage) => match storage.read::<VersionHistory>(&HISTORY_KEY).await {
                Ok(Some(history)) => {
                    debug!(snapshots = history.len(), "Loaded version history");
                    history
                }
                Ok(None) => VersionHistory::new(),
                Err(e) => {
                    warn!(error = %e, "Failed to load version history, starting fresh");
                    VersionHistory::new()
                }
            },
        };

        Self {
            history,
            config,
            storage,
        }
    }

    /// Apply an editor change, timestamped now.
    ///
    /// Takes the complete current text, not a delta.
    pub async fn apply_edit(&mut self, text: &str) -> RecordOutcome {
        self.apply_edit_at(text, Utc::now()).await
    }

    /// Apply an editor change with an explicit timestamp.
    ///
    /// The history is updated first and persisted after; a persistence
    /// failure is logged and never rolls the edit back. Skipped (no-op)
    /// edits do not touch storage.
    pub async fn apply_edit_at(&mut self, text: &str, now: DateTime<Utc>) -> RecordOutcome {
        let outcome = self.history.record(text, now, &self.config);

        if outcome.changed() {
            self.persist().await;
        }

        outcome
    }

    /// Drop the recorded history, in memory and in storage.
    ///
    /// The in-memory history is cleared even when removing the stored record
    /// fails.
    pub async fn clear(&mut self) -> CoreResult<()> {
        self.history.clear();

        if let Some(storage) = &self.storage {
            storage.remove(&HISTORY_KEY).await?;
        }

        Ok(())
    }

    /// The recorded history.
    pub fn history(&self) -> &VersionHistory {
        &self.history
    }

    /// The snapshot sequence, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        self.history.snapshots()
    }

    /// Text to seed the editor widget with: the most recent snapshot's
    /// content, or the empty string for a fresh session.
    pub fn latest_text(&self) -> &str {
        self.history.latest().map(|s| s.text.as_str()).unwrap_or("")
    }

    async fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };

        if let Err(e) = storage.write(&HISTORY_KEY, &self.history).await {
            // Best-effort: the in-memory sequence stays authoritative and
            // the next successful write catches up.
            warn!(error = %e, "Failed to persist version history");
        }
    }
}
