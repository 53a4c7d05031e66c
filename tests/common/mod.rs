//! Consolidated test utilities for git-tree-status
//!
//! Provides unified testing utilities for integration tests, focused on
//! real git repository scenarios for reliable testing.

pub mod repository;
