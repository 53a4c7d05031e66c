//! Parsing of raw `git status` short-format output.
//!
//! This module turns the line-oriented text produced by the short-status
//! subprocess into a [`StatusMap`] of absolute file paths. It normalizes
//! rename syntax (`old -> new` keeps only the new path), strips `./`
//! prefixes, and anchors every relative path on the resolved repository
//! root.
//!
//! # Public API
//! - [`parse_short_status`]: Raw tool output + repository root -> StatusMap
//!
//! # Robustness
//! Malformed individual lines are skipped, never fatal; duplicate paths are
//! last-write-wins. The only error is a structurally invalid invocation
//! with an empty repository root.

use crate::core::error::{Result, TreeStatusError};
use crate::core::status_code::{StatusCode, StatusMap};
use std::path::Path;

/// Repository root as a key prefix: trailing separators collapsed to
/// exactly one.
pub(crate) fn root_prefix(root: &Path) -> String {
    let root = root.to_string_lossy();
    format!("{}/", root.trim_end_matches('/'))
}

/// Parses short-status output into a file-only [`StatusMap`] with keys
/// anchored on `root`.
///
/// Each useful line is `XY <path>`: the first two characters are the status
/// code, the path starts after the third. Rename lines keep only the path
/// after the `" -> "` separator. Fails only when `root` is empty; lines too
/// short to carry a code and a path are silently dropped.
pub fn parse_short_status(raw: &str, root: &Path) -> Result<StatusMap> {
    if root.as_os_str().is_empty() {
        return Err(TreeStatusError::MissingRepoRoot);
    }

    let prefix = root_prefix(root);
    let mut map = StatusMap::new();

    for line in raw.lines() {
        // A code, a separator and at least one path character.
        if line.len() < 3 || !line.is_char_boundary(2) || !line.is_char_boundary(3) {
            continue;
        }
        let Some(code) = StatusCode::parse(&line[..2]) else {
            continue;
        };

        let mut path = &line[3..];
        if code.index_state() == 'R' {
            if let Some((_, renamed_to)) = path.split_once(" -> ") {
                path = renamed_to;
            }
        }
        let path = path.strip_prefix("./").unwrap_or(path);
        if path.is_empty() {
            continue;
        }

        map.insert(format!("{prefix}{path}"), code);
    }

    Ok(map)
}
