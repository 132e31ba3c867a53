// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Autoplaying project carousel.
//!
//! The controller owns the slide index, the progress of the current
//! autoplay cycle and the pause cooldown after manual navigation. Time is
//! delivered from outside through a [`clock::TickSource`], so the same
//! state machine runs against the frame clock in the app and a manual
//! clock in tests.

pub mod clock;
pub mod controller;
pub mod position;
pub mod timer;

pub use controller::{CarouselController, CarouselSnapshot};
pub use position::{position_of, SlidePosition};

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors reported by the carousel controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    EmptyCatalog,
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid carousel configuration: {0}")]
    InvalidConfig(String),
}

/// Timing constants for the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay tick period
    pub tick_interval_ms: u64,
    /// Time for progress to go from 0 to 100
    pub auto_scroll_period_ms: u64,
    /// Cooldown after manual navigation
    pub pause_duration_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            auto_scroll_period_ms: 3000,
            pause_duration_ms: 8000,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.tick_interval_ms == 0 {
            return Err(CarouselError::InvalidConfig(
                "tick interval must be positive".to_string(),
            ));
        }
        if self.auto_scroll_period_ms < self.tick_interval_ms {
            return Err(CarouselError::InvalidConfig(format!(
                "auto-scroll period {}ms is shorter than the {}ms tick",
                self.auto_scroll_period_ms, self.tick_interval_ms
            )));
        }
        if self.pause_duration_ms == 0 {
            return Err(CarouselError::InvalidConfig(
                "pause duration must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn pause_duration(&self) -> Duration {
        Duration::from_millis(self.pause_duration_ms)
    }

    /// Number of ticks in one autoplay cycle, rounded up.
    pub fn ticks_per_cycle(&self) -> u32 {
        let ticks = self.auto_scroll_period_ms.div_ceil(self.tick_interval_ms.max(1));
        ticks.clamp(1, u32::MAX as u64) as u32
    }

    /// Progress gained per tick, in percent.
    pub fn progress_step(&self) -> f32 {
        100.0 / self.ticks_per_cycle() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_step() {
        let config = CarouselConfig::default();
        assert_eq!(config.ticks_per_cycle(), 30);
        assert!((config.progress_step() - 100.0 / 30.0).abs() < 1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_uneven_period_rounds_up() {
        let config = CarouselConfig {
            auto_scroll_period_ms: 250,
            ..CarouselConfig::default()
        };
        assert_eq!(config.ticks_per_cycle(), 3);
    }

    #[test]
    fn test_invalid_configs() {
        let zero_tick = CarouselConfig {
            tick_interval_ms: 0,
            ..CarouselConfig::default()
        };
        assert!(matches!(zero_tick.validate(), Err(CarouselError::InvalidConfig(_))));

        let short_period = CarouselConfig {
            auto_scroll_period_ms: 50,
            ..CarouselConfig::default()
        };
        assert!(short_period.validate().is_err());

        let no_pause = CarouselConfig {
            pause_duration_ms: 0,
            ..CarouselConfig::default()
        };
        assert!(no_pause.validate().is_err());
    }
}
