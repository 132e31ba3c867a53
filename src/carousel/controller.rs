// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Carousel state machine.
//!
//! Running: every tick adds one step of progress; the tick that completes
//! a cycle advances the slide and resets progress. Paused: entered on any
//! manual navigation, progress frozen, left automatically when the
//! cooldown expires. Independently of both, the host can deactivate the
//! controller while the carousel is off screen, which stops the tick timer.

use super::clock::TickSource;
use super::position::{position_of, SlidePosition};
use super::timer::{Interval, Timeout};
use super::{CarouselConfig, CarouselError};
use std::time::Duration;

/// Read-only view of the carousel for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    /// Percent of the current autoplay cycle, in `[0, 100]`
    pub progress: f32,
    pub paused: bool,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    config: CarouselConfig,
    len: usize,
    current: usize,
    /// Ticks elapsed in the current cycle
    ticks: u32,
    ticks_per_cycle: u32,
    paused: bool,
    active: bool,
    ticker: Interval,
    cooldown: Timeout,
}

impl CarouselController {
    /// Create a running controller over `len` slides, starting at slide 0.
    pub fn new(len: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::EmptyCatalog);
        }
        config.validate()?;

        let mut ticker = Interval::new(config.tick_interval());
        ticker.start();

        Ok(Self {
            config,
            len,
            current: 0,
            ticks: 0,
            ticks_per_cycle: config.ticks_per_cycle(),
            paused: false,
            active: true,
            ticker,
            cooldown: Timeout::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn progress(&self) -> f32 {
        (self.ticks as f32 * 100.0 / self.ticks_per_cycle as f32).min(100.0)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True while autoplay ticks are being counted.
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// True while any timer is pending, i.e. the host should keep repainting.
    pub fn needs_time(&self) -> bool {
        self.ticker.is_running() || self.cooldown.is_pending()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current,
            progress: self.progress(),
            paused: self.paused,
            active: self.active,
        }
    }

    pub fn position_of(&self, index: usize) -> SlidePosition {
        position_of(index, self.current, self.len)
    }

    /// Role of every slide, in catalog order.
    pub fn positions(&self) -> Vec<SlidePosition> {
        (0..self.len).map(|i| self.position_of(i)).collect()
    }

    pub fn next(&mut self) {
        let target = (self.current + 1) % self.len;
        log::info!("Carousel next: {} -> {}", self.current, target);
        self.navigate(target);
    }

    pub fn prev(&mut self) {
        let target = (self.current + self.len - 1) % self.len;
        log::info!("Carousel prev: {} -> {}", self.current, target);
        self.navigate(target);
    }

    /// Jump to `index`. Out-of-range indices are rejected and leave the
    /// controller untouched.
    pub fn goto(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        log::info!("Carousel goto: {} -> {}", self.current, index);
        self.navigate(index);
        Ok(())
    }

    /// Resume ticking, e.g. when the carousel scrolls into view.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        if !self.paused {
            self.ticker.start();
        }
        log::debug!("Carousel activated");
    }

    /// Stop ticking, e.g. when the carousel scrolls out of view.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.ticker.stop();
        log::debug!("Carousel deactivated");
    }

    /// Set activation from a visibility signal.
    pub fn set_active(&mut self, visible: bool) {
        if visible {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    /// Pull elapsed time from `source` and run the timers.
    pub fn pump(&mut self, source: &mut impl TickSource) {
        let elapsed = source.elapsed();
        self.advance(elapsed);
    }

    /// Let `elapsed` pass, firing timers in chronological order.
    pub fn advance(&mut self, mut elapsed: Duration) {
        while !elapsed.is_zero() {
            let step = [self.cooldown.remaining(), self.ticker.remaining()]
                .into_iter()
                .flatten()
                .fold(elapsed, Duration::min);

            let cooldown_done = self.cooldown.elapse(step);
            let ticked = self.ticker.elapse(step);
            elapsed -= step;

            if cooldown_done {
                self.resume();
            }
            if ticked {
                self.tick();
            }
        }
    }

    fn navigate(&mut self, target: usize) {
        self.current = target;
        self.ticks = 0;
        self.pause();
    }

    fn pause(&mut self) {
        self.paused = true;
        self.ticker.stop();
        self.cooldown.schedule(self.config.pause_duration());
    }

    fn resume(&mut self) {
        self.paused = false;
        if self.active {
            self.ticker.start();
        }
        log::debug!("Carousel cooldown elapsed, autoplay resumed");
    }

    fn tick(&mut self) {
        if self.paused || !self.active {
            return;
        }
        self.ticks += 1;
        if self.ticks >= self.ticks_per_cycle {
            let target = (self.current + 1) % self.len;
            log::debug!("Carousel autoplay: {} -> {}", self.current, target);
            self.current = target;
            self.ticks = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::clock::ManualClock;

    fn controller(len: usize) -> CarouselController {
        CarouselController::new(len, CarouselConfig::default()).unwrap()
    }

    fn tick_interval(c: &CarouselController) -> Duration {
        c.config().tick_interval()
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            CarouselController::new(0, CarouselConfig::default()).unwrap_err(),
            CarouselError::EmptyCatalog
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CarouselConfig {
            tick_interval_ms: 0,
            ..CarouselConfig::default()
        };
        assert!(matches!(
            CarouselController::new(3, config),
            Err(CarouselError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_initial_state() {
        let c = controller(5);
        let snap = c.snapshot();
        assert_eq!(snap.current_index, 0);
        assert_eq!(snap.progress, 0.0);
        assert!(!snap.paused);
        assert!(snap.active);
        assert!(c.is_running());
    }

    #[test]
    fn test_next_wraps_around() {
        let mut c = controller(5);
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(c.current_index(), 4);
        c.next();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut c = controller(5);
        c.prev();
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn test_next_then_prev_round_trip() {
        for len in 1..=6 {
            for start in 0..len {
                let mut c = controller(len);
                c.goto(start).unwrap();
                c.next();
                c.prev();
                assert_eq!(c.current_index(), start);
            }
        }
    }

    #[test]
    fn test_goto_sets_state_regardless_of_prior() {
        let mut c = controller(5);
        c.advance(tick_interval(&c) * 7);
        assert!(c.progress() > 0.0);

        c.goto(2).unwrap();
        let snap = c.snapshot();
        assert_eq!(snap.current_index, 2);
        assert_eq!(snap.progress, 0.0);
        assert!(snap.paused);
    }

    #[test]
    fn test_repeated_goto_is_idempotent_and_restarts_cooldown() {
        let mut c = controller(5);
        let pause = c.config().pause_duration();

        c.goto(3).unwrap();
        c.advance(pause - Duration::from_millis(1));
        assert!(c.is_paused());

        c.goto(3).unwrap();
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.progress(), 0.0);

        c.advance(Duration::from_millis(1));
        assert!(c.is_paused());
        c.advance(pause);
        assert!(!c.is_paused());
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_goto_out_of_range_leaves_state() {
        let mut c = controller(5);
        c.advance(tick_interval(&c) * 4);
        let before = c.snapshot();

        assert_eq!(
            c.goto(5),
            Err(CarouselError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(c.snapshot(), before);
        assert!(c.is_running());
    }

    #[test]
    fn test_autoplay_advances_exactly_once_per_cycle() {
        let mut c = controller(5);
        let ticks = c.config().ticks_per_cycle();
        let tick = tick_interval(&c);

        for _ in 0..ticks - 1 {
            c.advance(tick);
        }
        assert_eq!(c.current_index(), 0);
        assert!(c.progress() > 95.0);

        c.advance(tick);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.progress(), 0.0);

        c.advance(tick);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_autoplay_in_one_large_step() {
        let mut c = controller(5);
        let period = Duration::from_millis(c.config().auto_scroll_period_ms);

        c.advance(period * 3);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn test_autoplay_uneven_period() {
        let config = CarouselConfig {
            tick_interval_ms: 100,
            auto_scroll_period_ms: 250,
            pause_duration_ms: 1000,
        };
        let mut c = CarouselController::new(4, config).unwrap();

        c.advance(Duration::from_millis(200));
        assert_eq!(c.current_index(), 0);
        c.advance(Duration::from_millis(100));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_progress_steps() {
        let mut c = controller(3);
        let step = c.config().progress_step();

        c.advance(tick_interval(&c));
        assert!((c.progress() - step).abs() < 1e-4);
        c.advance(tick_interval(&c) / 2);
        assert!((c.progress() - step).abs() < 1e-4);
    }

    #[test]
    fn test_manual_navigation_pauses_then_resumes() {
        let mut c = controller(5);
        let pause = c.config().pause_duration();

        c.next();
        assert!(c.is_paused());
        assert!(!c.is_running());

        c.advance(pause / 2);
        assert!(c.is_paused());
        assert_eq!(c.progress(), 0.0);
        assert_eq!(c.current_index(), 1);

        c.advance(pause / 2);
        assert!(!c.is_paused());
        assert!(c.is_running());
    }

    #[test]
    fn test_cooldown_expiring_mid_frame_resumes_ticking() {
        let mut c = controller(5);
        let pause = c.config().pause_duration();
        let tick = tick_interval(&c);

        c.next();
        c.advance(pause + tick * 3);
        assert!(!c.is_paused());
        assert!((c.progress() - 3.0 * c.config().progress_step()).abs() < 1e-4);
    }

    #[test]
    fn test_deactivate_stops_ticking() {
        let mut c = controller(5);
        let tick = tick_interval(&c);
        c.advance(tick * 2);
        let progress = c.progress();

        c.deactivate();
        assert!(!c.is_running());
        c.advance(tick * 100);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.progress(), progress);

        c.activate();
        assert!(c.is_running());
        assert_eq!(c.progress(), progress);
        c.advance(tick);
        assert!(c.progress() > progress);
    }

    #[test]
    fn test_activation_is_idempotent() {
        let mut c = controller(5);
        c.activate();
        c.activate();
        assert!(c.is_active());

        c.deactivate();
        c.deactivate();
        assert!(!c.is_active());
        assert!(!c.is_running());
    }

    #[test]
    fn test_activate_while_paused_waits_for_cooldown() {
        let mut c = controller(5);
        c.deactivate();
        c.next();
        c.activate();
        assert!(!c.is_running());

        c.advance(c.config().pause_duration());
        assert!(!c.is_paused());
        assert!(c.is_running());
    }

    #[test]
    fn test_cooldown_expiring_while_inactive() {
        let mut c = controller(5);
        c.next();
        c.deactivate();
        c.advance(c.config().pause_duration());

        assert!(!c.is_paused());
        assert!(!c.is_running());
        assert!(!c.needs_time());

        c.activate();
        assert!(c.is_running());
    }

    #[test]
    fn test_pump_uses_tick_source() {
        let mut c = controller(5);
        let mut clock = ManualClock::new();
        clock.advance(Duration::from_millis(c.config().auto_scroll_period_ms));

        c.pump(&mut clock);
        assert_eq!(c.current_index(), 1);

        c.pump(&mut clock);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_single_slide_cycles_in_place() {
        let mut c = controller(1);
        c.next();
        assert_eq!(c.current_index(), 0);
        c.prev();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.positions(), vec![SlidePosition::Current]);
    }

    #[test]
    fn test_positions_follow_current() {
        let mut c = controller(5);
        c.goto(2).unwrap();
        assert_eq!(
            c.positions(),
            vec![
                SlidePosition::Hidden,
                SlidePosition::Prev,
                SlidePosition::Current,
                SlidePosition::Next,
                SlidePosition::Hidden,
            ]
        );
    }
}
