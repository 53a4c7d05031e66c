//! End-to-end tests of the status service against real git repositories.

use git_tree_status::core::{StatusCategory, StatusCode, StatusConfig, StatusService};
use std::sync::mpsc;
use tempfile::TempDir;

mod common;
use common::repository::*;

fn test_config() -> StatusConfig {
    StatusConfig {
        cache_timeout_ms: 60_000,
        debounce_delay_ms: 0,
        show_directory_status: true,
    }
}

#[test]
fn test_acquire_reports_untracked_files_and_directories() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "src/new.txt", "content")?;

    let service = StatusService::new(test_config());
    let map = service.acquire(repo.path());
    let prefix = repo.prefix();

    let file = &map[&format!("{prefix}/src/new.txt")];
    assert_eq!(file.category(), StatusCategory::Untracked);
    // The enclosing directory inherits the status; the root never does.
    assert!(map.contains_key(&format!("{prefix}/src/")));
    assert!(!map.contains_key(&format!("{prefix}/")));
    Ok(())
}

#[test]
fn test_acquire_reports_modified_file_with_aggregated_parents() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "a/b/c.txt", "v1")?;
    git(&repo.path, &["add", "."])?;
    git(&repo.path, &["commit", "-m", "Add nested file"])?;
    create_file(&repo.path, "a/b/c.txt", "v2")?;

    let service = StatusService::new(test_config());
    let map = service.acquire(repo.path());
    let prefix = repo.prefix();

    assert_eq!(
        map[&format!("{prefix}/a/b/c.txt")].category(),
        StatusCategory::Modified
    );
    assert_eq!(
        map[&format!("{prefix}/a/b/")].category(),
        StatusCategory::Modified
    );
    assert_eq!(
        map[&format!("{prefix}/a/")].category(),
        StatusCategory::Modified
    );
    assert!(!map.contains_key(&format!("{prefix}/")));
    Ok(())
}

#[test]
fn test_acquire_reports_staged_rename_under_new_path_only() -> anyhow::Result<()> {
    let repo = setup_test_repo_with_initial_commit()?;
    git(&repo.path, &["mv", "initial.txt", "renamed.txt"])?;

    let service = StatusService::new(test_config());
    let map = service.acquire(repo.path());
    let prefix = repo.prefix();

    assert_eq!(
        map[&format!("{prefix}/renamed.txt")].category(),
        StatusCategory::Renamed
    );
    assert!(!map.contains_key(&format!("{prefix}/initial.txt")));
    Ok(())
}

#[test]
fn test_acquire_from_nested_directory_uses_repository_root() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "src/deep/new.txt", "content")?;

    let service = StatusService::new(test_config());
    let map = service.acquire(&repo.path.join("src").join("deep"));
    let prefix = repo.prefix();

    // Keys are anchored on the repository root, not the queried directory.
    assert!(map.contains_key(&format!("{prefix}/src/deep/new.txt")));
    Ok(())
}

#[test]
fn test_acquire_outside_any_repository_is_empty() -> anyhow::Result<()> {
    let plain = TempDir::new()?;
    let service = StatusService::new(test_config());
    assert!(service.acquire(plain.path()).is_empty());
    Ok(())
}

#[test]
fn test_clean_repository_yields_empty_map() -> anyhow::Result<()> {
    let repo = setup_test_repo_with_initial_commit()?;
    let service = StatusService::new(test_config());
    assert!(service.acquire(repo.path()).is_empty());
    Ok(())
}

#[test]
fn test_disabled_aggregation_delivers_file_only_map() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "src/new.txt", "content")?;

    let mut config = test_config();
    config.show_directory_status = false;
    let service = StatusService::new(config);
    let map = service.acquire(repo.path());
    let prefix = repo.prefix();

    assert!(map.contains_key(&format!("{prefix}/src/new.txt")));
    assert!(!map.contains_key(&format!("{prefix}/src/")));
    Ok(())
}

#[test]
fn test_async_acquire_delivers_same_map_as_blocking() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "new.txt", "content")?;

    let service = StatusService::new(test_config());
    let (tx, rx) = mpsc::channel();
    service.acquire_async(repo.path(), move |map| tx.send(map).unwrap());
    let delivered = rx.recv()?;

    let prefix = repo.prefix();
    assert_eq!(
        delivered[&format!("{prefix}/new.txt")],
        StatusCode::new('?', '?')
    );

    // The async result landed in the cache; a blocking call reuses it.
    let cached = service.acquire(repo.path());
    assert_eq!(*cached, *delivered);
    Ok(())
}

#[test]
fn test_status_changes_show_up_after_invalidation() -> anyhow::Result<()> {
    let repo = setup_test_repo()?;
    let service = StatusService::new(test_config());

    assert!(service.acquire(repo.path()).is_empty());

    create_file(&repo.path, "new.txt", "content")?;
    // Within the TTL the stale empty map is served; an external trigger
    // invalidates and the next acquire re-invokes git.
    assert!(service.acquire(repo.path()).is_empty());
    service.invalidate_all();
    let map = service.acquire(repo.path());
    assert!(map.contains_key(&format!("{}/new.txt", repo.prefix())));
    Ok(())
}
