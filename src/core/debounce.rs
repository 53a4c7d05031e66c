//! Burst coalescing for upstream triggers.
//!
//! Buffer-enter, post-write and focus-change style events tend to arrive
//! in bursts. [`Debouncer`] collapses a burst into a single action fired
//! after a quiet period: each call supersedes the previous one, and only
//! the last call's action runs once the delay elapses with no further
//! calls.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct Debouncer {
    delay: Duration,
    generation: Arc<Mutex<u64>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(Mutex::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `action` after the quiet period. A later call before the
    /// period elapses supersedes this one; the superseded action never
    /// runs.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let sequence = {
            let mut generation = self.generation.lock().expect("debouncer lock poisoned");
            *generation = generation.wrapping_add(1);
            *generation
        };
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;
        thread::spawn(move || {
            thread::sleep(delay);
            let current = *generation.lock().expect("debouncer lock poisoned");
            if current == sequence {
                action();
            }
        });
    }
}
