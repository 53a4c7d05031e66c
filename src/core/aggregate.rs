//! Directory-level status aggregation.
//!
//! Given a file-only [`StatusMap`], this module derives a status for every
//! ancestor directory between each file and the repository root: a
//! directory inherits the highest-priority status among its descendants.
//! The repository root itself never receives a derived status.
//!
//! # Public API
//! - [`aggregate_directories`]: File map + root -> file map with derived
//!   directory entries
//!
//! # Tie-breaking
//! Equal-priority candidates (Renamed vs Deleted) keep whichever was
//! encountered first. Map iteration order is unspecified, so the winner
//! among equal priorities is explicitly nondeterministic.

use crate::core::parser::root_prefix;
use crate::core::status_code::{StatusCode, StatusMap};
use std::collections::HashMap;
use std::path::Path;

/// Walks every entry's ancestor chain up to, and strictly excluding, the
/// repository root, recording the highest-priority status per directory.
/// Derived directory keys end with exactly one trailing `/` and never
/// overwrite an entry already present in the input map.
pub fn aggregate_directories(files: &StatusMap, root: &Path) -> StatusMap {
    let prefix = root_prefix(root);
    let mut dirs: HashMap<String, StatusCode> = HashMap::new();

    for (path, code) in files {
        let priority = code.category().priority();
        let mut current = parent_dir(path);
        while let Some(dir) = current {
            if dir.len() <= prefix.len() || !dir.starts_with(prefix.as_str()) {
                break;
            }
            let recorded = dirs
                .get(&dir)
                .map(|c| c.category().priority())
                .unwrap_or(0);
            if priority > recorded {
                dirs.insert(dir.clone(), *code);
            }
            current = parent_dir(&dir);
        }
    }

    // File entries are authoritative: a derived directory never replaces an
    // existing key.
    let mut merged = files.clone();
    for (dir, code) in dirs {
        merged.entry(dir).or_insert(code);
    }
    merged
}

/// Parent directory key of `path`, with exactly one trailing separator.
/// `None` once the path has no separator left.
fn parent_dir(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    let split = trimmed.rfind('/')?;
    Some(trimmed[..=split].to_string())
}
