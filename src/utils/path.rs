//! Path utilities: expand `~` in user supplied paths.

use std::path::PathBuf;

/// `~/jobs.json` → `$HOME/jobs.json`; other paths are returned as given.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
