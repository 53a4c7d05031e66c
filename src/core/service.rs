//! Status acquisition orchestration.
//!
//! [`StatusService`] ties the pipeline together: resolve the repository
//! root, consult the TTL cache, and on a miss run the short-status
//! subprocess, parse, aggregate directories, write the cache and deliver.
//! It offers a blocking mode and a non-blocking mode; the non-blocking
//! path coalesces concurrent requests for the same root through the
//! [`RequestCoordinator`] so at most one subprocess runs per root at a
//! time.
//!
//! # Public API
//! - [`StatusService`]: Orchestrator owning cache and coordinator
//! - [`StatusBackend`]: Seam over the subprocess invocation
//! - [`GitBackend`]: Production backend running `git status --porcelain`
//!
//! # Failure Policy
//! A missing repository, a launch failure and a nonzero exit all normalize
//! to an empty map at this boundary. Failed results are never written to
//! the cache, so the next request retries immediately instead of waiting
//! out the TTL.

use crate::core::aggregate::aggregate_directories;
use crate::core::cache::StatusCache;
use crate::core::config::StatusConfig;
use crate::core::coordinator::{AcquireRole, RequestCoordinator, StatusCallback};
use crate::core::parser::parse_short_status;
use crate::core::resolver::find_repo_root;
use crate::core::status_code::StatusMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use std::thread;

/// Runs the version-control tool's short-status command scoped to a
/// repository root.
pub trait StatusBackend: Send + Sync {
    /// Returns captured stdout, or `None` when the tool exits nonzero or
    /// cannot be launched. Standard error is ignored either way.
    fn short_status(&self, root: &Path) -> Option<String>;
}

/// Production backend shelling out to `git`.
pub struct GitBackend;

impl StatusBackend for GitBackend {
    fn short_status(&self, root: &Path) -> Option<String> {
        let output = Command::new("git")
            .args(["status", "--porcelain", "-u"])
            .current_dir(root)
            .output()
            .ok()?;
        if !output.status.success() {
            log::debug!(
                "git status exited with {} for {}",
                output.status,
                root.display()
            );
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Orchestrates root resolution, caching, subprocess invocation, parsing,
/// aggregation and fan-out. One instance per process, shared behind an
/// [`Arc`]; cache and coordinator live inside it rather than as globals.
pub struct StatusService {
    config: StatusConfig,
    backend: Box<dyn StatusBackend>,
    cache: StatusCache,
    coordinator: RequestCoordinator,
}

impl StatusService {
    pub fn new(config: StatusConfig) -> Arc<Self> {
        Self::with_backend(config, Box::new(GitBackend))
    }

    /// Builds a service over a custom backend. Used by tests to count and
    /// script subprocess invocations.
    pub fn with_backend(config: StatusConfig, backend: Box<dyn StatusBackend>) -> Arc<Self> {
        Arc::new(Self {
            cache: StatusCache::new(config.cache_timeout()),
            coordinator: RequestCoordinator::new(),
            config,
            backend,
        })
    }

    pub fn config(&self) -> &StatusConfig {
        &self.config
    }

    /// Blocking acquisition: resolves the root, returns the cached map on
    /// a hit, otherwise runs the subprocess on the calling thread. Status
    /// unavailability (no root, failed invocation) yields an empty map,
    /// never an error.
    pub fn acquire(&self, dir: &Path) -> Arc<StatusMap> {
        let Some(root) = resolve_root(dir) else {
            log::debug!("no repository encloses {}", dir.display());
            return empty_map();
        };
        if let Some(hit) = self.cache.get(&root) {
            log::debug!("cache hit for {}", root.display());
            return hit;
        }
        self.refresh(&root)
    }

    /// Non-blocking acquisition: `on_result` is always invoked through an
    /// asynchronous delivery path, never reentrantly on the calling
    /// thread. On a cache miss the first caller becomes leader and runs
    /// the subprocess on a worker thread; concurrent callers for the same
    /// root are enqueued and receive the leader's result.
    pub fn acquire_async<F>(self: &Arc<Self>, dir: &Path, on_result: F)
    where
        F: FnOnce(Arc<StatusMap>) + Send + 'static,
    {
        let Some(root) = resolve_root(dir) else {
            log::debug!("no repository encloses {}", dir.display());
            deliver(Box::new(on_result), empty_map());
            return;
        };
        if let Some(hit) = self.cache.get(&root) {
            log::debug!("cache hit for {}", root.display());
            deliver(Box::new(on_result), hit);
            return;
        }
        match self.coordinator.try_begin(&root, Box::new(on_result)) {
            AcquireRole::Leader => {
                let service = Arc::clone(self);
                thread::spawn(move || {
                    let map = service.refresh(&root);
                    service.coordinator.complete(&root, map);
                });
            }
            AcquireRole::Follower => {
                log::debug!("joined in-flight request for {}", root.display());
            }
        }
    }

    /// Clears every cached root. Used on external triggers (terminal
    /// close, VCS-plugin events) where the changed roots are unknown.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Runs the subprocess for `root`, parses and aggregates, and writes
    /// the cache. Failures yield an empty map and leave the cache
    /// untouched so the next request retries immediately.
    fn refresh(&self, root: &Path) -> Arc<StatusMap> {
        log::debug!("refreshing status for {}", root.display());
        let Some(raw) = self.backend.short_status(root) else {
            log::warn!("status unavailable for {}", root.display());
            return empty_map();
        };
        let files = match parse_short_status(&raw, root) {
            Ok(files) => files,
            Err(e) => {
                log::warn!("discarding unparsable status for {}: {e}", root.display());
                return empty_map();
            }
        };
        let map = if self.config.show_directory_status {
            aggregate_directories(&files, root)
        } else {
            files
        };
        let map = Arc::new(map);
        self.cache.put(root, Arc::clone(&map));
        map
    }
}

/// Canonicalizes the starting directory and walks upward for the marker.
/// Canonicalization keeps map keys consistent with what the resolver
/// anchored them on.
fn resolve_root(dir: &Path) -> Option<PathBuf> {
    let dir = dir.canonicalize().ok()?;
    find_repo_root(&dir)
}

fn empty_map() -> Arc<StatusMap> {
    Arc::new(StatusMap::new())
}

fn deliver(callback: StatusCallback, map: Arc<StatusMap>) {
    thread::spawn(move || callback(map));
}
