//! Path helpers for user-supplied file locations.

use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Anything else is passed through untouched, so absolute and relative
/// paths in the configuration keep working as written.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }

    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    PathBuf::from(path)
}
