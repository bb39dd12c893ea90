//! Bounded in-memory webhook log.
//!
//! Entries are kept newest first. Inserting past capacity evicts from the
//! tail, so the oldest entries leave first.
//!
//! The deque sits behind a mutex that is held for each whole mutation, so
//! concurrent writers interleave at entry granularity and the length never
//! exceeds capacity, even transiently. The `webhook_log_entries` gauge is
//! set under the same lock so it always matches the last mutation.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::observability::metrics;
use crate::webhook::types::{LogEntry, PayloadData};

/// A thread-safe, capacity-bounded log of accepted payloads.
#[derive(Debug)]
pub struct WebhookLog {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
}

impl WebhookLog {
    /// Create an empty log holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store a payload at the head of the log, stamped with receipt time.
    pub fn record(&self, payload: PayloadData) -> LogEntry {
        let entry = LogEntry::received(payload);

        let mut entries = self.lock();
        entries.push_front(entry.clone());
        entries.truncate(self.capacity);
        metrics::record_log_size(entries.len());

        entry
    }

    /// Snapshot of the log, newest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    /// Remove every entry, returning how many were dropped.
    pub fn clear(&self) -> usize {
        let mut entries = self.lock();
        let removed = entries.len();
        entries.clear();
        metrics::record_log_size(0);
        removed
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the deque half-updated,
    // so a poisoned guard is still usable.
    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for WebhookLog {
    fn default() -> Self {
        Self::new(crate::config::schema::DEFAULT_LOG_CAPACITY)
    }
}
