// SPDX-License-Identifier: MPL-2.0
//! Toast records stored by the queue.

use super::timer::Timer;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast within one queue.
///
/// Keys are allocated from a per-queue counter and never reused, so a stale
/// key held by the display layer can only ever refer to a toast that is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastKey(u64);

impl ToastKey {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value of this key.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Per-toast options passed to [`ToastQueue::add`](super::ToastQueue::add).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// Auto-dismiss delay. `None` keeps the toast until it is closed.
    pub timeout: Option<Duration>,
}

impl ToastOptions {
    /// Options with an auto-dismiss timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// A queued toast: its key, caller-supplied content and dismissal timer.
#[derive(Debug, Clone)]
pub struct Toast<T> {
    key: ToastKey,
    content: T,
    timeout: Option<Duration>,
    pub(crate) timer: Option<Timer>,
}

impl<T> Toast<T> {
    pub(crate) fn new(key: ToastKey, content: T, timeout: Option<Duration>) -> Self {
        Self {
            key,
            content,
            timeout,
            timer: None,
        }
    }

    #[must_use]
    pub fn key(&self) -> ToastKey {
        self.key
    }

    #[must_use]
    pub fn content(&self) -> &T {
        &self.content
    }

    /// The effective timeout, after the queue's minimum was applied.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the scheduled dismissal timer, if one has been started.
    #[must_use]
    pub fn timer(&self) -> Option<&Timer> {
        self.timer.as_ref()
    }
}
