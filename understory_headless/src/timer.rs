// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-shot timers driven by an explicit clock.
//!
//! ## Overview
//!
//! Engines never sleep or spawn. A [`Timer`] is a slot holding at most one
//! pending deadline plus a payload. The host's event loop (or a test) asks the
//! engine to poll, and the engine calls [`Timer::take_due`] with the current
//! time from its [`Clock`]. A due timer yields its payload exactly once and its
//! slot is cleared, so a second poll or a late cancel is a no-op.
//!
//! ## Clocks
//!
//! - [`SystemClock`]: monotonic wall time since the clock was created.
//! - [`ManualClock`]: shared, manually advanced time for tests and replay.
//!
//! ```
//! use core::time::Duration;
//! use understory_headless::timer::{Clock, ManualClock, Timer};
//!
//! let clock = ManualClock::new();
//! let mut timer: Timer<&str> = Timer::new();
//! assert!(timer.start(clock.now(), Duration::from_millis(100), "open"));
//!
//! clock.advance(Duration::from_millis(99));
//! assert_eq!(timer.take_due(clock.now()), None);
//! clock.advance(Duration::from_millis(1));
//! assert_eq!(timer.take_due(clock.now()), Some("open"));
//! assert_eq!(timer.take_due(clock.now()), None);
//! ```

use alloc::rc::Rc;
use core::cell::Cell;
use core::time::Duration;

/// A monotonic time source, measured from an arbitrary epoch.
pub trait Clock {
    /// Time elapsed since the clock's epoch.
    fn now(&self) -> Duration;
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle while an engine
/// holds another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// A clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jump to an absolute time. Moving backwards is ignored.
    pub fn set(&self, to: Duration) {
        if to > self.now.get() {
            self.now.set(to);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Monotonic wall-clock time since construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    epoch: std::time::Instant,
}

impl SystemClock {
    /// A clock whose epoch is the moment of construction.
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// A single pending deadline carrying a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer<T> {
    pending: Option<(Duration, T)>,
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Timer<T> {
    /// An idle timer.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule the timer to fire `delay` after `now`.
    ///
    /// Returns `false`, leaving the existing deadline untouched, if the timer
    /// is already pending.
    pub fn start(&mut self, now: Duration, delay: Duration, payload: T) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some((now + delay, payload));
        true
    }

    /// Drop any pending deadline. Idempotent.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(at, _)| *at)
    }

    /// If the deadline has passed, clear the slot and return the payload.
    pub fn take_due(&mut self, now: Duration) -> Option<T> {
        match self.pending {
            Some((at, _)) if at <= now => self.pending.take().map(|(_, payload)| payload),
            _ => None,
        }
    }
}
