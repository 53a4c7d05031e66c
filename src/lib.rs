//! Git Tree Status - annotate hierarchical file listings with git status.
//!
//! This library derives per-entry and per-directory change indicators from
//! `git status` short-format output, so a file browser can redraw without
//! re-invoking git every time. It parses raw status lines into a map of
//! absolute paths, aggregates directory status by priority, caches results
//! per repository root with a TTL, and coalesces concurrent requests so at
//! most one subprocess runs per root.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Status codes, categories and classification
//! - Parsing and directory aggregation
//! - The caching, coalescing [`core::StatusService`]
//! - Configuration, error handling and presentation lookup

pub mod core;

// Re-export the core public API for external users
pub use core::{
    aggregate_directories,
    // Presentation lookup
    category_style,
    find_repo_root,
    parse_short_status,
    placement,
    print_error,

    AcquireRole,

    CacheEntry,
    DecorationTable,
    // Trigger debouncing
    Debouncer,
    // Backends
    GitBackend,
    Placement,
    RequestCoordinator,
    // Error handling
    Result,
    StatusBackend,
    StatusCache,
    StatusCallback,
    // Status model
    StatusCategory,
    StatusCode,
    // Configuration
    StatusConfig,
    StatusMap,
    // Orchestration
    StatusService,
    TreeStatusError,
};
