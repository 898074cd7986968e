//! Version-snapshot heuristic for sketchpad.
//!
//! This crate decides, on every text change, whether the change collapses
//! into the most recent recorded snapshot or starts a new one:
//! - Each edit is classified from a character-level diff as an insertion,
//!   a deletion, a mixture of both, or a no-op.
//! - A run of same-direction edits within a 3-minute window keeps replacing
//!   the most recent snapshot in place; anything else (direction switch,
//!   mixed edit, expired window) appends a new snapshot.
//!
//! The tracker is pure and synchronous: the caller supplies the clock, and
//! persistence is someone else's job.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, Utc};
//! use sketchpad_history::{HistoryConfig, VersionHistory};
//!
//! let config = HistoryConfig::default();
//! let mut history = VersionHistory::new();
//!
//! let t0 = Utc::now();
//! history.record("Hi", t0, &config);
//! history.record("Hi there", t0 + Duration::seconds(10), &config);
//!
//! // Two quick insertions collapse into a single snapshot.
//! assert_eq!(history.len(), 1);
//! assert_eq!(history.latest().unwrap().text, "Hi there");
//! ```

mod edit;
mod history;
mod snapshot;

pub use edit::{classify_edit, EditKind};
pub use history::{HistoryConfig, RecordOutcome, VersionHistory};
pub use snapshot::Snapshot;
