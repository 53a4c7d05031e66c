//! Time-to-live cache for computed status maps.
//!
//! Stores the last successful (file + directory) status map per repository
//! root together with its refresh instant. Staleness is checked lazily on
//! read; there is no background eviction, stale entries are simply
//! superseded by the next write.
//!
//! # Public API
//! - [`StatusCache`]: TTL cache keyed by repository root
//! - [`CacheEntry`]: One cached map with its refresh timestamp

use crate::core::status_code::StatusMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// One cached result. Owned exclusively by [`StatusCache`] and overwritten
/// whole on every successful refresh, never partially updated.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub map: Arc<StatusMap>,
    pub refreshed_at: Instant,
    pub root: PathBuf,
}

/// TTL cache keyed by repository root.
#[derive(Debug)]
pub struct StatusCache {
    ttl: Duration,
    entries: Mutex<HashMap<PathBuf, CacheEntry>>,
}

impl StatusCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached map while it is younger than the TTL. Stale
    /// entries are left in place until the next write supersedes them.
    pub fn get(&self, root: &Path) -> Option<Arc<StatusMap>> {
        let entries = self.entries.lock().expect("status cache lock poisoned");
        let entry = entries.get(root)?;
        if entry.refreshed_at.elapsed() < self.ttl {
            Some(Arc::clone(&entry.map))
        } else {
            None
        }
    }

    /// Unconditionally replaces the entry for `root`, stamped with the
    /// current instant.
    pub fn put(&self, root: &Path, map: Arc<StatusMap>) {
        let entry = CacheEntry {
            map,
            refreshed_at: Instant::now(),
            root: root.to_path_buf(),
        };
        self.entries
            .lock()
            .expect("status cache lock poisoned")
            .insert(root.to_path_buf(), entry);
    }

    /// Clears every entry. Used on external triggers where the precise set
    /// of changed roots is unknown.
    pub fn invalidate_all(&self) {
        self.entries
            .lock()
            .expect("status cache lock poisoned")
            .clear();
    }
}
