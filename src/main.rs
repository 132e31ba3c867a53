// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folio - a personal portfolio showcase
//!
//! A desktop rendition of a personal portfolio site: hero, about grid,
//! an autoplaying 3D project carousel and a contact page.

mod app;
mod carousel;
mod io;
mod models;
mod settings;
mod theme;
mod ui;
mod util;

use anyhow::Result;
use app::FolioApp;
use models::profile;
use settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings = Settings::load();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size(settings.min_window_size)
            .with_title(format!("{} - Portfolio", profile::NAME)),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| {
            let app = FolioApp::new(cc, settings)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
