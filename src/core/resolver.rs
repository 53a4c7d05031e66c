//! Repository root discovery.
//!
//! Locates the working-tree root for a directory by searching upward for
//! the `.git` metadata directory. No caching happens here; callers combine
//! this with the status cache.

use std::path::{Path, PathBuf};

/// Walks upward from `start` looking for a `.git` marker directory. The
/// root is the directory containing the marker, never the marker itself.
/// Returns `None` when no repository encloses `start`.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(".git").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
