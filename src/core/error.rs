//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`TreeStatusError`] which covers the failure modes of
//! git-tree-status. It uses `thiserror` for ergonomic error definitions and
//! includes constructor helpers for errors carrying context.
//!
//! # Public API
//! - [`TreeStatusError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, TreeStatusError>`
//!
//! # Error Policy
//! Only structurally invalid invocations (a missing repository root handed
//! to the parser) and configuration problems surface as errors. A missing
//! repository, a failed `git` launch, or a nonzero exit are all treated as
//! "no status available" by the service layer and never reach callers as
//! error values.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-tree-status
#[derive(Error, Debug)]
pub enum TreeStatusError {
    /// The parser was invoked without a repository root to anchor paths on.
    #[error("Repository root is empty or undefined")]
    MissingRepoRoot,

    #[error("Not inside a git repository")]
    NotInRepository,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using TreeStatusError
pub type Result<T> = std::result::Result<T, TreeStatusError>;

impl TreeStatusError {
    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }
}
