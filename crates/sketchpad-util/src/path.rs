//! Path utilities.

use std::path::PathBuf;

/// Get the sketchpad data directory.
///
/// This is where the persisted version history lives. Follows XDG
/// conventions:
/// - `$XDG_DATA_HOME/sketchpad` if set
/// - `~/.local/share/sketchpad` otherwise
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("sketchpad"))
}
