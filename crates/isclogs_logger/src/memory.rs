//! Thread-safe in-memory sink that accumulates delivered messages.

use crate::sink::LogSink;
use isclogs_message::Message;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Collects every dispatched message for later inspection.
///
/// Multiple threads can dispatch into the same sink. The failure count is
/// tracked atomically so [`has_failures`](Self::has_failures) does not lock
/// the message vector. A poisoned lock is recovered rather than propagated.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<Message>>,
    failure_count: AtomicUsize,
}

impl MemorySink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns `true` if any failure message has been dispatched.
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Returns the number of failure messages dispatched so far.
    pub fn failure_count(&self) -> usize {
        self.failure_count.load(Ordering::Relaxed)
    }

    /// Returns the number of messages currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no messages are held.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Takes all accumulated messages, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Message> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns a snapshot of all accumulated messages without draining.
    pub fn messages(&self) -> Vec<Message> {
        self.lock().clone()
    }
}

impl LogSink for MemorySink {
    fn dispatch(&self, message: &Message) {
        if message.is_failure() {
            self.failure_count.fetch_add(1, Ordering::Relaxed);
        }
        self.lock().push(message.clone());
    }
}
