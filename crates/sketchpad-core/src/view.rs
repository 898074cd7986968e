//! Read-only rendering of the recorded history.
//!
//! Display order is newest first. A snapshot whose content is the empty
//! string renders the explicit [`EMPTY_MARKER`], which is distinct from the
//! [`NO_VERSIONS`] indicator shown when nothing has been recorded at all.

use chrono::{DateTime, Local, TimeZone};
use sketchpad_history::Snapshot;

/// Marker shown for a snapshot with empty content.
pub const EMPTY_MARKER: &str = "Empty";

/// Indicator shown when the history has no snapshots.
pub const NO_VERSIONS: &str = "No versions yet.";

/// A display-ready history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Snapshot content, or [`EMPTY_MARKER`] for empty text.
    pub body: String,
    /// Formatted local timestamp.
    pub recorded_at: String,
}

impl HistoryEntry {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            body: if snapshot.text.is_empty() {
                EMPTY_MARKER.to_string()
            } else {
                snapshot.text.clone()
            },
            recorded_at: format_timestamp(snapshot.timestamp.with_timezone(&Local)),
        }
    }
}

/// Build display entries for the given snapshots, newest first.
pub fn history_entries(snapshots: &[Snapshot]) -> Vec<HistoryEntry> {
    snapshots
        .iter()
        .rev()
        .map(HistoryEntry::from_snapshot)
        .collect()
}

/// Render the whole history as text, one entry per paragraph, newest first.
pub fn render_history(snapshots: &[Snapshot]) -> String {
    if snapshots.is_empty() {
        return NO_VERSIONS.to_string();
    }

    history_entries(snapshots)
        .iter()
        .map(|e| format!("{}\n{}", e.body, e.recorded_at))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format a timestamp in the en-US long style, e.g.
/// `January 5, 2026, 3:04:05 PM`.
pub fn format_timestamp<Tz: TimeZone>(timestamp: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format("%B %-d, %Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snapshot(text: &str) -> Snapshot {
        Snapshot::new(text, Utc.with_ymd_and_hms(2026, 1, 5, 15, 4, 5).unwrap())
    }

    #[test]
    fn timestamps_render_in_long_en_us_style() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 5, 15, 4, 5).unwrap();
        assert_eq!(format_timestamp(ts), "January 5, 2026, 3:04:05 PM");

        let morning = Utc.with_ymd_and_hms(2026, 11, 23, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(morning), "November 23, 2026, 9:30:00 AM");
    }

    #[test]
    fn entries_come_newest_first() {
        let snapshots = vec![snapshot("oldest"), snapshot("middle"), snapshot("newest")];
        let entries = history_entries(&snapshots);

        assert_eq!(entries[0].body, "newest");
        assert_eq!(entries[2].body, "oldest");
    }

    #[test]
    fn empty_snapshot_renders_the_empty_marker() {
        let entries = history_entries(&[snapshot("")]);
        assert_eq!(entries[0].body, EMPTY_MARKER);
    }

    #[test]
    fn empty_history_is_distinct_from_an_empty_snapshot() {
        assert_eq!(render_history(&[]), NO_VERSIONS);
        assert_ne!(render_history(&[snapshot("")]), NO_VERSIONS);
        assert!(render_history(&[snapshot("")]).starts_with(EMPTY_MARKER));
    }

    #[test]
    fn rendered_history_contains_bodies_and_timestamps() {
        let newer = snapshot("Hi there");
        let stamp = format_timestamp(newer.timestamp.with_timezone(&Local));

        let rendered = render_history(&[snapshot("Hi"), newer]);

        assert!(rendered.starts_with("Hi there\n"));
        assert!(rendered.contains("\n\nHi\n"));
        assert!(rendered.contains(&stamp));
    }
}
