// SPDX-License-Identifier: MPL-2.0
//! Bounded toast queue with subscriptions and auto-dismiss timers.
//!
//! The [`ToastQueue`] keeps toasts in insertion order and splits them into a
//! visible set, capped at `max_visible_toasts`, and a pending FIFO. Closing a
//! visible toast promotes the oldest pending one. Every `add` and `close`
//! call synchronously notifies subscribers with the new visible set.
//!
//! # Usage
//!
//! ```
//! use iced_toasts::queue::{QueueOptions, ToastOptions, ToastQueue};
//!
//! let mut queue = ToastQueue::new(QueueOptions {
//!     max_visible_toasts: 2,
//!     ..QueueOptions::default()
//! });
//!
//! let a = queue.add("A", ToastOptions::default());
//! queue.add("B", ToastOptions::default());
//! queue.add("C", ToastOptions::default());
//! assert_eq!(queue.pending_count(), 1);
//!
//! queue.close(a);
//! let visible: Vec<_> = queue.visible_toasts().iter().map(|t| *t.content()).collect();
//! assert_eq!(visible, ["B", "C"]);
//! ```
//!
//! The queue is single-threaded: mutations take `&mut self` and listeners
//! only see a shared slice, so they cannot re-enter it.

mod listeners;
mod timer;
mod toast;

pub use listeners::SubscriptionId;
pub use timer::{Clock, ManualClock, SystemClock, Timer, TimerStart};
pub use toast::{Toast, ToastKey, ToastOptions};

use crate::config::defaults::DEFAULT_MAX_VISIBLE_TOASTS;
use listeners::Listeners;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Construction options for a [`ToastQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueOptions {
    /// Maximum number of toasts displayed at once. Values below 1 are raised to 1.
    pub max_visible_toasts: usize,
    /// Shortest accepted auto-dismiss timeout; shorter requests are raised to it.
    /// Zero by default, so requested timeouts are used as given.
    pub min_timeout: Duration,
    /// When dismissal timers start counting.
    pub timer_start: TimerStart,
}

impl Default for QueueOptions {
    fn default() -> Self {
        Self {
            max_visible_toasts: DEFAULT_MAX_VISIBLE_TOASTS,
            min_timeout: Duration::ZERO,
            timer_start: TimerStart::default(),
        }
    }
}

/// Ordered toast collection with a bounded visible set.
pub struct ToastQueue<T> {
    /// Toasts eligible for display, in the order they became visible.
    visible: Vec<Toast<T>>,
    /// Toasts waiting for a visible slot (oldest first).
    pending: VecDeque<Toast<T>>,
    listeners: Listeners<T>,
    options: QueueOptions,
    clock: Rc<dyn Clock>,
    next_key: u64,
    paused: bool,
}

impl<T> ToastQueue<T> {
    /// Creates an empty queue driven by the system clock.
    #[must_use]
    pub fn new(options: QueueOptions) -> Self {
        Self::with_clock(options, Rc::new(SystemClock))
    }

    /// Creates an empty queue reading time from `clock`.
    #[must_use]
    pub fn with_clock(options: QueueOptions, clock: Rc<dyn Clock>) -> Self {
        let options = QueueOptions {
            max_visible_toasts: options.max_visible_toasts.max(1),
            ..options
        };
        Self {
            visible: Vec::new(),
            pending: VecDeque::new(),
            listeners: Listeners::new(),
            options,
            clock,
            next_key: 0,
            paused: false,
        }
    }

    /// Enqueues a toast and returns its key.
    ///
    /// The toast is visible immediately if a slot is free, otherwise it waits
    /// in the pending queue until an earlier toast closes.
    pub fn add(&mut self, content: T, options: ToastOptions) -> ToastKey {
        let key = ToastKey::new(self.next_key);
        self.next_key += 1;

        let timeout = options
            .timeout
            .map(|timeout| timeout.max(self.options.min_timeout));
        let mut toast = Toast::new(key, content, timeout);

        let visible = self.visible.len() < self.options.max_visible_toasts;
        if visible || self.options.timer_start == TimerStart::OnAdd {
            self.start_timer(&mut toast);
        }

        if visible {
            self.visible.push(toast);
        } else {
            self.pending.push_back(toast);
        }

        tracing::debug!(
            %key,
            visible,
            ?timeout,
            pending = self.pending.len(),
            "toast added"
        );
        self.notify();
        key
    }

    /// Removes a toast, visible or pending, and cancels its timer.
    ///
    /// Listeners are notified on every call. An unknown key leaves the queue
    /// untouched and returns `false`, so closing the same toast twice leaves
    /// the same state as closing it once.
    pub fn close(&mut self, key: ToastKey) -> bool {
        let removed = if let Some(pos) = self.visible.iter().position(|t| t.key() == key) {
            let toast = self.visible.remove(pos);
            self.promote_pending();
            Some(toast)
        } else if let Some(pos) = self.pending.iter().position(|t| t.key() == key) {
            self.pending.remove(pos)
        } else {
            None
        };

        let closed = removed.is_some();
        if let Some(mut toast) = removed {
            if let Some(timer) = toast.timer.as_mut() {
                timer.cancel();
            }
            tracing::debug!(%key, visible = self.visible.len(), "toast closed");
            self.resume_if_empty();
        } else {
            tracing::trace!(%key, "close ignored for unknown toast");
        }

        self.notify();
        closed
    }

    /// Registers a listener called with the visible toasts after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[Toast<T>]) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Deregisters a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    /// Closes every toast whose timer is due, earliest deadline first.
    ///
    /// Each expired toast goes through [`close`](Self::close), so listeners
    /// see one notification per dismissed toast. Returns the expired keys.
    pub fn tick(&mut self) -> Vec<ToastKey> {
        let now = self.clock.now();
        let mut due: Vec<(Instant, ToastKey)> = self
            .visible
            .iter()
            .chain(self.pending.iter())
            .filter_map(|toast| {
                let timer = toast.timer.as_ref()?;
                if timer.is_due(now) {
                    timer.deadline().map(|deadline| (deadline, toast.key()))
                } else {
                    None
                }
            })
            .collect();
        due.sort_unstable();

        let mut expired = Vec::with_capacity(due.len());
        for (_, key) in due {
            let fired = self
                .get_mut(key)
                .and_then(|toast| toast.timer.as_mut())
                .is_some_and(|timer| timer.fire(now));
            if fired {
                tracing::trace!(%key, "toast timer fired");
                self.close(key);
                expired.push(key);
            }
        }
        expired
    }

    /// Removes every toast. Listeners are notified once if anything was removed.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        for toast in self.visible.iter_mut().chain(self.pending.iter_mut()) {
            if let Some(timer) = toast.timer.as_mut() {
                timer.cancel();
            }
        }
        let removed = self.len();
        self.visible.clear();
        self.pending.clear();
        self.paused = false;

        tracing::debug!(removed, "toast queue cleared");
        self.notify();
    }

    /// Freezes all running timers, e.g. while the pointer is over the toasts.
    ///
    /// Toasts added while paused start with a paused timer.
    pub fn pause_all(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        let now = self.clock.now();
        for toast in self.visible.iter_mut().chain(self.pending.iter_mut()) {
            if let Some(timer) = toast.timer.as_mut() {
                timer.pause(now);
            }
        }
    }

    /// Restarts timers frozen by [`pause_all`](Self::pause_all).
    pub fn resume_all(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        let now = self.clock.now();
        for toast in self.visible.iter_mut().chain(self.pending.iter_mut()) {
            if let Some(timer) = toast.timer.as_mut() {
                timer.resume(now);
            }
        }
    }

    /// Toasts currently eligible for display, in display order.
    #[must_use]
    pub fn visible_toasts(&self) -> &[Toast<T>] {
        &self.visible
    }

    /// Toasts waiting for a visible slot, oldest first.
    pub fn pending_toasts(&self) -> impl Iterator<Item = &Toast<T>> {
        self.pending.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Total number of toasts, visible and pending.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len() + self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.pending.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: ToastKey) -> Option<&Toast<T>> {
        self.visible
            .iter()
            .chain(self.pending.iter())
            .find(|toast| toast.key() == key)
    }

    #[must_use]
    pub fn contains(&self, key: ToastKey) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn is_visible(&self, key: ToastKey) -> bool {
        self.visible.iter().any(|toast| toast.key() == key)
    }

    #[must_use]
    pub fn max_visible_toasts(&self) -> usize {
        self.options.max_visible_toasts
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Earliest deadline among running timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.visible
            .iter()
            .chain(self.pending.iter())
            .filter_map(|toast| toast.timer.as_ref().and_then(Timer::deadline))
            .min()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn get_mut(&mut self, key: ToastKey) -> Option<&mut Toast<T>> {
        self.visible
            .iter_mut()
            .chain(self.pending.iter_mut())
            .find(|toast| toast.key() == key)
    }

    fn start_timer(&self, toast: &mut Toast<T>) {
        if let Some(timeout) = toast.timeout() {
            let now = self.clock.now();
            let mut timer = Timer::start(timeout, now);
            if self.paused {
                timer.pause(now);
            }
            toast.timer = Some(timer);
        }
    }

    /// Moves pending toasts into free visible slots, oldest first.
    fn promote_pending(&mut self) {
        while self.visible.len() < self.options.max_visible_toasts {
            let Some(mut toast) = self.pending.pop_front() else {
                break;
            };
            if toast.timer.is_none() {
                self.start_timer(&mut toast);
            }
            tracing::debug!(key = %toast.key(), "pending toast promoted");
            self.visible.push(toast);
        }
    }

    /// Drops the hover pause once nothing is left to display. The region
    /// that requested it is gone, so it will never ask to resume.
    fn resume_if_empty(&mut self) {
        if self.paused && self.is_empty() {
            tracing::trace!("toast queue emptied while paused, resuming");
            self.paused = false;
        }
    }

    fn notify(&mut self) {
        self.listeners.notify(&self.visible);
    }
}

impl<T> Default for ToastQueue<T> {
    fn default() -> Self {
        Self::new(QueueOptions::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ToastQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastQueue")
            .field("visible", &self.visible)
            .field("pending", &self.pending)
            .field("listeners", &self.listeners)
            .field("options", &self.options)
            .field("paused", &self.paused)
            .finish_non_exhaustive()
    }
}
