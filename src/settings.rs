// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Everything has a built-in default. A YAML or JSON file named by the
//! `FOLIO_SETTINGS` environment variable may override any subset.

use crate::carousel::CarouselConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an optional settings file.
pub const SETTINGS_ENV: &str = "FOLIO_SETTINGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub carousel: CarouselConfig,
    /// Smooth-scroll animation length
    pub scroll_duration_ms: u64,
    /// Portion of the carousel that must be on screen for autoplay
    pub visibility_threshold: f32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            scroll_duration_ms: 1200,
            visibility_threshold: 0.5,
            window_size: [1280.0, 800.0],
            min_window_size: [800.0, 600.0],
        }
    }
}

impl Settings {
    /// Check values that would otherwise break the carousel or the layout.
    pub fn validate(&self) -> Result<()> {
        self.carousel.validate()?;
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.visibility_threshold),
            "visibility threshold {} outside [0, 1]",
            self.visibility_threshold
        );
        Ok(())
    }

    /// Load from `path`, choosing the format by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings: Settings = crate::io::serialization::import_settings(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the file named in `FOLIO_SETTINGS`, falling back to the
    /// defaults when the variable is unset or the file is unusable.
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV).map(PathBuf::from) {
            Some(path) => match Self::from_file(&path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::error!("Failed to load settings from {}: {:#}", path.display(), e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "carousel:\n  pause_duration_ms: 2000\nscroll_duration_ms: 600").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.carousel.pause_duration_ms, 2000);
        assert_eq!(settings.carousel.tick_interval_ms, 100);
        assert_eq!(settings.scroll_duration_ms, 600);
        assert_eq!(settings.visibility_threshold, 0.5);
    }

    #[test]
    fn test_json_settings() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"carousel": {{"auto_scroll_period_ms": 4000}}}}"#).unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.carousel.auto_scroll_period_ms, 4000);
        assert_eq!(settings.carousel.ticks_per_cycle(), 40);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "carousel:\n  tick_interval_ms: 0").unwrap();
        assert!(Settings::from_file(file.path()).is_err());

        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "visibility_threshold: 1.5").unwrap();
        assert!(Settings::from_file(file.path()).is_err());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(Settings::from_file(file.path()).is_err());
    }
}
