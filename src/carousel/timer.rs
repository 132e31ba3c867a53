// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Virtual timers driven by elapsed time.
//!
//! Neither timer reads a clock. The owner feeds them elapsed time through
//! `elapse`, never more than `remaining()` at once, which keeps the firing
//! order deterministic under both real and simulated time.

use std::time::Duration;

/// A single-shot timer. Scheduling replaces any pending deadline.
#[derive(Debug, Clone, Default)]
pub struct Timeout {
    remaining: Option<Duration>,
}

impl Timeout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, cancelling whatever was pending.
    pub fn schedule(&mut self, after: Duration) {
        self.remaining = Some(after);
    }

    /// Disarm the timer. No-op when nothing is pending.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time until the timer fires, if armed.
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Let `step` pass. Returns true exactly once, when the deadline is reached.
    pub fn elapse(&mut self, step: Duration) -> bool {
        match self.remaining {
            Some(left) if step >= left => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - step);
                false
            }
            None => false,
        }
    }
}

/// A repeating timer with a fixed period.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    remaining: Option<Duration>,
}

impl Interval {
    /// Create a stopped interval. `period` must be non-zero.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            remaining: None,
        }
    }

    /// (Re)start the interval; the first firing is one full period away.
    pub fn start(&mut self) {
        self.remaining = Some(self.period);
    }

    /// Stop the interval. No-op when already stopped.
    pub fn stop(&mut self) {
        self.remaining = None;
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time until the next firing, if running.
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Let `step` pass. Returns true when a period boundary is reached and
    /// re-arms for the next period.
    pub fn elapse(&mut self, step: Duration) -> bool {
        match self.remaining {
            Some(left) if step >= left => {
                self.remaining = Some(self.period);
                true
            }
            Some(left) => {
                self.remaining = Some(left - step);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_timeout_fires_once() {
        let mut timeout = Timeout::new();
        timeout.schedule(MS * 300);

        assert!(!timeout.elapse(MS * 200));
        assert_eq!(timeout.remaining(), Some(MS * 100));
        assert!(timeout.elapse(MS * 100));
        assert!(!timeout.is_pending());
        assert!(!timeout.elapse(MS * 1000));
    }

    #[test]
    fn test_timeout_reschedule_replaces_deadline() {
        let mut timeout = Timeout::new();
        timeout.schedule(MS * 100);
        timeout.elapse(MS * 90);
        timeout.schedule(MS * 100);

        assert!(!timeout.elapse(MS * 20));
        assert_eq!(timeout.remaining(), Some(MS * 80));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timeout = Timeout::new();
        timeout.cancel();
        timeout.schedule(MS * 10);
        timeout.cancel();
        timeout.cancel();
        assert!(!timeout.is_pending());

        let mut interval = Interval::new(MS * 10);
        interval.stop();
        interval.start();
        interval.stop();
        interval.stop();
        assert!(!interval.is_running());
    }

    #[test]
    fn test_interval_rearms() {
        let mut interval = Interval::new(MS * 100);
        assert!(!interval.elapse(MS * 100));

        interval.start();
        assert!(interval.elapse(MS * 100));
        assert_eq!(interval.remaining(), Some(MS * 100));
        assert!(!interval.elapse(MS * 50));
        assert!(interval.elapse(MS * 50));
    }
}
