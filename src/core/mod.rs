//! Core functionality for git-tree-status.
//!
//! This module provides the status-acquisition-and-aggregation engine:
//! classification, parsing, directory aggregation, caching, request
//! coalescing and orchestration, plus the configuration and presentation
//! pieces around it.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod coordinator;
pub mod debounce;
pub mod decor;
pub mod dirs;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod service;
pub mod status_code;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, TreeStatusError};

// === Status codes and classification ===
// Typed two-character codes and their priority-carrying categories
pub use status_code::{StatusCategory, StatusCode, StatusMap};

// === Parsing and aggregation ===
// Raw short-status text -> file map -> file+directory map
pub use aggregate::aggregate_directories;
pub use parser::parse_short_status;

// === Repository resolution ===
pub use resolver::find_repo_root;

// === Caching and request coalescing ===
pub use cache::{CacheEntry, StatusCache};
pub use coordinator::{AcquireRole, RequestCoordinator, StatusCallback};

// === Orchestration ===
// Blocking and non-blocking acquisition over a pluggable backend
pub use service::{GitBackend, StatusBackend, StatusService};

// === Configuration ===
pub use config::StatusConfig;

// === Trigger debouncing ===
pub use debounce::Debouncer;

// === Presentation lookup ===
pub use decor::{category_style, placement, print_error, DecorationTable, Placement};
