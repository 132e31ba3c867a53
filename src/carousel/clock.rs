// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tick sources: where the carousel's elapsed time comes from.

use std::time::{Duration, Instant};

/// Longest gap a single frame may report. Anything larger (a minimized
/// window, a debugger pause) is delivered as this much time.
pub const MAX_FRAME_GAP: Duration = Duration::from_secs(1);

/// Something that can report how much time passed since it was last asked.
pub trait TickSource {
    fn elapsed(&mut self) -> Duration;
}

/// Real monotonic time, sampled once per rendered frame.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn elapsed_at(&mut self, now: Instant) -> Duration {
        let gap = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        gap.min(MAX_FRAME_GAP)
    }
}

impl TickSource for FrameClock {
    fn elapsed(&mut self) -> Duration {
        self.elapsed_at(Instant::now())
    }
}

/// Simulated time for tests: accumulates whatever is pushed with `advance`.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    pending: Duration,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.pending += by;
    }
}

#[cfg(test)]
impl TickSource for ManualClock {
    fn elapsed(&mut self) -> Duration {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_first_sample_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.elapsed_at(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_frame_clock_clamps_long_gaps() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.elapsed_at(start);

        let gap = clock.elapsed_at(start + Duration::from_millis(250));
        assert_eq!(gap, Duration::from_millis(250));

        let gap = clock.elapsed_at(start + Duration::from_secs(60));
        assert_eq!(gap, MAX_FRAME_GAP);
    }

    #[test]
    fn test_manual_clock_drains() {
        let mut clock = ManualClock::new();
        clock.advance(Duration::from_millis(40));
        clock.advance(Duration::from_millis(60));

        assert_eq!(clock.elapsed(), Duration::from_millis(100));
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }
}
