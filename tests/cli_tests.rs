//! CLI tests for the git-tree-status binary.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

mod common;
use common::repository::*;

/// Binary command with config redirected into a scratch directory so
/// tests never touch the user's real config file.
fn cli(config_home: &TempDir) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("git-tree-status")?;
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    Ok(cmd)
}

#[test]
fn test_lists_entries_with_repository_header() -> anyhow::Result<()> {
    let config_home = TempDir::new()?;
    let repo = setup_test_repo()?;
    create_file(&repo.path, "newfile.txt", "content")?;

    cli(&config_home)?
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository:"))
        .stdout(predicate::str::contains("newfile.txt"));

    Ok(())
}

#[test]
fn test_directories_are_rendered_with_trailing_separator() -> anyhow::Result<()> {
    let config_home = TempDir::new()?;
    let repo = setup_test_repo()?;
    create_file(&repo.path, "src/newfile.txt", "content")?;

    cli(&config_home)?
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("src/"));

    Ok(())
}

#[test]
fn test_no_directory_status_flag_is_accepted() -> anyhow::Result<()> {
    let config_home = TempDir::new()?;
    let repo = setup_test_repo()?;
    create_file(&repo.path, "src/newfile.txt", "content")?;

    cli(&config_home)?
        .arg(repo.path())
        .arg("--no-directory-status")
        .assert()
        .success()
        .stdout(predicate::str::contains("src/"));

    Ok(())
}

#[test]
fn test_outside_a_repository_reports_an_error() -> anyhow::Result<()> {
    let config_home = TempDir::new()?;
    let plain = TempDir::new()?;

    cli(&config_home)?
        .arg(plain.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Not inside a git repository"));

    Ok(())
}

#[test]
fn test_nonexistent_path_reports_an_error() -> anyhow::Result<()> {
    let config_home = TempDir::new()?;

    cli(&config_home)?
        .arg("/definitely/not/a/real/path")
        .assert()
        .failure();

    Ok(())
}
