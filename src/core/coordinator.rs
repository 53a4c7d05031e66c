//! Deduplication of concurrent status requests per repository root.
//!
//! The first caller to register for a root becomes the leader and is
//! responsible for running the acquisition and publishing its result.
//! Every caller registering while that request is outstanding becomes a
//! follower: its callback joins the waiter list and no second acquisition
//! is started. [`RequestCoordinator::complete`] fans the result out to all
//! waiters in registration order and retires the pending entry.
//!
//! # Public API
//! - [`RequestCoordinator`]: try_begin/complete pair enforcing one leader
//!   per root
//! - [`AcquireRole`]: whether a registration became leader or follower
//! - [`StatusCallback`]: boxed completion callback

use crate::core::status_code::StatusMap;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Completion callback receiving the delivered status map.
pub type StatusCallback = Box<dyn FnOnce(Arc<StatusMap>) + Send + 'static>;

/// Role handed back by [`RequestCoordinator::try_begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireRole {
    /// No request was in flight; the caller must run the acquisition and
    /// call [`RequestCoordinator::complete`] exactly once.
    Leader,
    /// A request is already outstanding; the callback was enqueued and the
    /// caller has nothing further to do.
    Follower,
}

#[derive(Default)]
pub struct RequestCoordinator {
    pending: Mutex<HashMap<PathBuf, Vec<StatusCallback>>>,
}

impl RequestCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` as a waiter for `root`. The check-and-insert
    /// happens under the lock, so between a `Leader` return and the
    /// matching [`complete`](Self::complete) every other call for the same
    /// root becomes a `Follower`.
    pub fn try_begin(&self, root: &Path, callback: StatusCallback) -> AcquireRole {
        let mut pending = self.pending.lock().expect("coordinator lock poisoned");
        match pending.entry(root.to_path_buf()) {
            Entry::Occupied(mut waiters) => {
                waiters.get_mut().push(callback);
                AcquireRole::Follower
            }
            Entry::Vacant(slot) => {
                slot.insert(vec![callback]);
                AcquireRole::Leader
            }
        }
    }

    /// Publishes `result` to every waiter registered for `root`, in FIFO
    /// order, and removes the pending entry. The waiter list is detached
    /// under the lock and callbacks run outside it, so no callback can
    /// observe a partially drained list or start a second fan-out.
    pub fn complete(&self, root: &Path, result: Arc<StatusMap>) {
        let waiters = self
            .pending
            .lock()
            .expect("coordinator lock poisoned")
            .remove(root)
            .unwrap_or_default();
        for callback in waiters {
            callback(Arc::clone(&result));
        }
    }
}
