// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation bar with page links and the theme toggle.

use crate::app::Page;
use crate::models::profile;
use crate::theme::ThemeStore;
use crate::ui::palette::Palette;
use egui::RichText;

/// Display the navigation bar.
pub fn show(ui: &mut egui::Ui, current_page: &mut Page, theme: &mut ThemeStore) {
    let palette = Palette::for_mode(theme.mode());

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 16.0;

        let brand = ui.add(
            egui::Label::new(RichText::new(profile::NAME).size(18.0).strong().color(palette.heading))
                .sense(egui::Sense::click()),
        );
        if brand.clicked() {
            *current_page = Page::Home;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Sun in dark mode, moon in light mode
            let icon = if theme.is_dark() { "☀" } else { "🌙" };
            let toggle = ui
                .add(egui::Button::new(RichText::new(icon).size(18.0)).fill(palette.chip).rounding(16.0))
                .on_hover_text("Toggle theme");
            if toggle.clicked() {
                theme.toggle();
            }

            ui.separator();

            for page in Page::ALL.iter().rev() {
                let selected = *current_page == *page;
                let text = if selected {
                    RichText::new(page.label()).strong().color(palette.accent)
                } else {
                    RichText::new(page.label()).color(palette.text)
                };
                if ui.selectable_label(selected, text).clicked() {
                    *current_page = *page;
                }
            }
        });
    });
}
