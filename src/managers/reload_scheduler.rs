//! Timer queue for the deferred half of a reload pulse.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A restore waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRestore {
    pub tab_id: String,
    pub address: String,
    pub due: Instant,
}

/// Queue of pending restores ordered by due time.
///
/// Callers supply `now` so the queue can be driven by a real clock or by tests.
pub struct ReloadScheduler {
    delay: Duration,
    queue: VecDeque<PendingRestore>,
}

impl ReloadScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            queue: VecDeque::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the delay for restores scheduled from now on.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Schedules a restore of `address` on `tab_id` at `now + delay`.
    ///
    /// A tab has at most one pulse in flight, so any restore already queued
    /// for `tab_id` is replaced.
    pub fn schedule(&mut self, tab_id: &str, address: String, now: Instant) -> Instant {
        self.queue.retain(|p| p.tab_id != tab_id);
        let due = now + self.delay;
        let pos = self
            .queue
            .iter()
            .position(|p| p.due > due)
            .unwrap_or(self.queue.len());
        self.queue.insert(
            pos,
            PendingRestore {
                tab_id: tab_id.to_string(),
                address,
                due,
            },
        );
        due
    }

    /// Removes and returns every restore due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingRestore> {
        let mut due = Vec::new();
        while self.queue.front().is_some_and(|p| p.due <= now) {
            if let Some(p) = self.queue.pop_front() {
                due.push(p);
            }
        }
        due
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.front().map(|p| p.due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
