// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page footer.

use crate::models::profile;
use crate::ui::palette::Palette;
use egui::RichText;

pub fn show(ui: &mut egui::Ui, palette: &Palette) {
    ui.separator();
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("© 2025 {}. All rights reserved.", profile::NAME))
                .small()
                .color(palette.muted),
        );
        ui.label(
            RichText::new("Built with Rust and egui")
                .small()
                .color(palette.subtle),
        );
    });
    ui.add_space(16.0);
}
