//! Edit classification.
//!
//! Each content change is classified by diffing the previous snapshot text
//! against the new full text at character granularity and counting inserted
//! and removed characters across the whole edit script.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// Classification of a single edit.
///
/// Derived per change, used only to decide whether the *next* edit continues
/// the current run. Not persisted; a fresh session always starts at `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Characters were added and none removed.
    Insert,
    /// Characters were removed and none added.
    Delete,
    /// Characters were both added and removed.
    Mixture,
    /// The text is unchanged.
    #[default]
    None,
}

/// Classify the edit that turned `previous` into `current`.
///
/// Runs an LCS-based diff over Unicode characters; unchanged segments are
/// ignored. Degenerate inputs (empty or identical strings) always resolve to
/// a valid classification.
pub fn classify_edit(previous: &str, current: &str) -> EditKind {
    let diff = TextDiff::from_chars(previous, current);

    let mut insertions = 0usize;
    let mut deletions = 0usize;

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => insertions += 1,
            ChangeTag::Delete => deletions += 1,
            ChangeTag::Equal => {}
        }
    }

    match (insertions > 0, deletions > 0) {
        (true, false) => EditKind::Insert,
        (false, true) => EditKind::Delete,
        (true, true) => EditKind::Mixture,
        (false, false) => EditKind::None,
    }
}
