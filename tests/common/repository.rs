//! Git repository setup utilities for integration tests
//!
//! Provides functions for creating real repositories in various states so
//! tests exercise the same `git status` output the service sees in
//! production.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository handle. The TempDir must be kept alive for the
/// duration of the test to prevent cleanup. The stored path is
/// canonicalized so it matches the keys the service produces.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Repository root as a map-key prefix (no trailing separator).
    pub fn prefix(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Sets up a fresh git repository with basic user configuration so
/// commits never prompt.
pub fn setup_test_repo() -> anyhow::Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().canonicalize()?;

    git(&path, &["init"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo { temp_dir, path })
}

/// Repository with one committed file, ready for modify/delete/rename
/// scenarios.
pub fn setup_test_repo_with_initial_commit() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "initial.txt", "initial content")?;
    git(&repo.path, &["add", "."])?;
    git(&repo.path, &["commit", "-m", "Initial commit"])?;
    Ok(repo)
}

/// Runs a git command in `path`, failing the test on a nonzero exit.
pub fn git(path: &Path, args: &[&str]) -> anyhow::Result<()> {
    let output = Command::new("git").args(args).current_dir(path).output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}

/// Writes a file relative to the repository root, creating parent
/// directories as needed.
pub fn create_file(repo: &Path, relative: &str, content: &str) -> anyhow::Result<()> {
    let target = repo.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, content)?;
    Ok(())
}
