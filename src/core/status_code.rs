//! Two-character git status codes and their semantic classification.
//!
//! This module defines [`StatusCode`], the raw index/worktree state pair from
//! git's short-status format, and [`StatusCategory`], the semantic grouping
//! used for directory aggregation priorities and presentation lookup. It
//! replaces string matching on status codes throughout the codebase with
//! typed values.
//!
//! # Public API
//! - [`StatusCode`]: Copyable two-character short-status code
//! - [`StatusCategory`]: Semantic category with a fixed aggregation priority
//! - [`StatusMap`]: Absolute path -> status code mapping
//!
//! # Key Features
//! - **Type safety**: Codes are validated once at parse time
//! - **Classification**: First-match rules mirroring git's XY semantics
//! - **Priority ordering**: Drives highest-status-wins directory aggregation

use std::collections::HashMap;
use std::fmt;

/// Mapping from absolute path to status code.
///
/// File keys carry no trailing separator; derived directory keys end with
/// exactly one trailing `/`. Keys never point outside the repository root
/// they were computed for.
pub type StatusMap = HashMap<String, StatusCode>;

/// A two-character code from git's short-status format.
///
/// The first character is the index (staged) state, the second the working
/// tree state; `??` marks untracked entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode {
    index: char,
    worktree: char,
}

impl StatusCode {
    pub fn new(index: char, worktree: char) -> Self {
        Self { index, worktree }
    }

    /// Reads a code from the first two characters of `s`. Returns `None`
    /// when `s` is shorter than two characters.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let index = chars.next()?;
        let worktree = chars.next()?;
        Some(Self { index, worktree })
    }

    /// The staged/index state character (first position).
    pub fn index_state(&self) -> char {
        self.index
    }

    /// The working-tree state character (second position).
    pub fn worktree_state(&self) -> char {
        self.worktree
    }

    pub fn category(&self) -> StatusCategory {
        StatusCategory::classify(Some(*self))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.index, self.worktree)
    }
}

/// Semantic category of a status code.
///
/// Each category carries a fixed priority used when a directory inherits the
/// highest status among its descendants. Renamed and Deleted share a
/// priority; ties between them during aggregation are resolved by whichever
/// is encountered first and callers must not rely on a particular winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Conflict,
    PartiallyStaged,
    Modified,
    Added,
    Renamed,
    Deleted,
    Untracked,
    None,
}

impl StatusCategory {
    /// Number of variants, for fixed-size lookup tables indexed by
    /// [`StatusCategory::index`].
    pub const COUNT: usize = 8;

    /// Classifies a code into its category. Rules are evaluated in strict
    /// order, first match wins; unknown codes and absence both map to
    /// `None`. Total and side-effect-free.
    pub fn classify(code: Option<StatusCode>) -> Self {
        let Some(code) = code else {
            return Self::None;
        };
        let x = code.index_state();
        let y = code.worktree_state();
        match (x, y) {
            ('U', 'U') | ('A', 'A') | ('D', 'D') | ('A', 'U') | ('U', 'A') | ('D', 'U')
            | ('U', 'D') => Self::Conflict,
            ('M', 'M') | ('M', 'D') | ('A', 'M') | ('A', 'D') => Self::PartiallyStaged,
            _ if x == 'M' || y == 'M' => Self::Modified,
            _ if x == 'A' => Self::Added,
            _ if x == 'R' => Self::Renamed,
            _ if x == 'D' || y == 'D' => Self::Deleted,
            ('?', '?') => Self::Untracked,
            _ => Self::None,
        }
    }

    /// Aggregation priority. Higher values dominate when a directory
    /// inherits status from its descendants.
    pub fn priority(self) -> u8 {
        match self {
            Self::Conflict => 6,
            Self::PartiallyStaged => 5,
            Self::Modified => 4,
            Self::Added => 3,
            Self::Renamed | Self::Deleted => 2,
            Self::Untracked => 1,
            Self::None => 0,
        }
    }

    /// Dense index for lookup tables sized [`StatusCategory::COUNT`].
    pub fn index(self) -> usize {
        match self {
            Self::Conflict => 0,
            Self::PartiallyStaged => 1,
            Self::Modified => 2,
            Self::Added => 3,
            Self::Renamed => 4,
            Self::Deleted => 5,
            Self::Untracked => 6,
            Self::None => 7,
        }
    }

    /// Get human-readable description for the category
    pub fn description(self) -> &'static str {
        match self {
            Self::Conflict => "conflict",
            Self::PartiallyStaged => "partially staged",
            Self::Modified => "modified",
            Self::Added => "added",
            Self::Renamed => "renamed",
            Self::Deleted => "deleted",
            Self::Untracked => "untracked",
            Self::None => "none",
        }
    }
}
