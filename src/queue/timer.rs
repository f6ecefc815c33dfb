// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers and the time source that drives them.
//!
//! A [`Timer`] is a one-shot deadline stored next to its toast. It never
//! fires by itself: the queue polls it from [`ToastQueue::tick`], which the
//! UI loop calls periodically. Every state transition is idempotent, so a
//! timer that was already fired or cancelled ignores further requests.
//!
//! [`ToastQueue::tick`]: super::ToastQueue::tick

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle and give
/// another to the queue.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// When a toast's dismissal timer starts counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStart {
    /// The timer is scheduled as soon as the toast is added.
    #[default]
    OnAdd,
    /// Pending toasts start their timer when promoted to the visible set.
    OnVisible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running { deadline: Instant },
    Paused { remaining: Duration },
    Fired,
    Cancelled,
}

/// A pausable, cancellable one-shot timer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    state: State,
}

impl Timer {
    /// Starts a timer that becomes due `duration` after `now`.
    #[must_use]
    pub fn start(duration: Duration, now: Instant) -> Self {
        Self {
            state: State::Running {
                deadline: now + duration,
            },
        }
    }

    /// Returns the deadline of a running timer.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            State::Running { deadline } => Some(deadline),
            _ => None,
        }
    }

    /// Returns the time left before the timer is due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            State::Running { deadline } => Some(deadline.saturating_duration_since(now)),
            State::Paused { remaining } => Some(remaining),
            State::Fired | State::Cancelled => None,
        }
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.state, State::Running { deadline } if deadline <= now)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self.state, State::Paused { .. })
    }

    /// Whether the timer can still fire (running or paused).
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Running { .. } | State::Paused { .. })
    }

    /// Freezes a running timer, keeping the time left.
    pub fn pause(&mut self, now: Instant) {
        if let State::Running { deadline } = self.state {
            self.state = State::Paused {
                remaining: deadline.saturating_duration_since(now),
            };
        }
    }

    /// Restarts a paused timer with the time it had left.
    pub fn resume(&mut self, now: Instant) {
        if let State::Paused { remaining } = self.state {
            self.state = State::Running {
                deadline: now + remaining,
            };
        }
    }

    pub fn cancel(&mut self) {
        if self.is_active() {
            self.state = State::Cancelled;
        }
    }

    /// Marks a due timer as fired. Returns `true` only on the firing transition.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.state = State::Fired;
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            State::Running { .. } => f.write_str("Timer(running)"),
            State::Paused { remaining } => write!(f, "Timer(paused, {remaining:?} left)"),
            State::Fired => f.write_str("Timer(fired)"),
            State::Cancelled => f.write_str("Timer(cancelled)"),
        }
    }
}
