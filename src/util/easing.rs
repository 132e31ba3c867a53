// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Smooth scrolling between page sections.

use std::time::Duration;

/// Ease-in-out cubic on `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A scroll from one vertical offset to another over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start: f32,
    target: f32,
    duration: Duration,
    elapsed: Duration,
}

impl ScrollAnimation {
    pub fn new(start: f32, target: f32, duration: Duration) -> Self {
        Self {
            start,
            target,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Move time forward and return the offset to display.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.offset()
    }

    pub fn offset(&self) -> f32 {
        if self.duration.is_zero() {
            return self.target;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.start + (self.target - self.start) * ease_in_out_cubic(t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out_cubic(-1.0), 0.0);
        assert_eq!(ease_in_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_in_out_cubic(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_scroll_reaches_target() {
        let mut anim = ScrollAnimation::new(100.0, 900.0, Duration::from_millis(1200));
        assert_eq!(anim.offset(), 100.0);

        let mid = anim.advance(Duration::from_millis(600));
        assert!((mid - 500.0).abs() < 1e-3);
        assert!(!anim.is_finished());

        let end = anim.advance(Duration::from_secs(5));
        assert_eq!(end, 900.0);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_scroll_upwards() {
        let mut anim = ScrollAnimation::new(800.0, 0.0, Duration::from_millis(100));
        let quarter = anim.advance(Duration::from_millis(25));
        assert!(quarter < 800.0 && quarter > 400.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let anim = ScrollAnimation::new(0.0, 300.0, Duration::ZERO);
        assert_eq!(anim.offset(), 300.0);
        assert!(anim.is_finished());
    }
}
