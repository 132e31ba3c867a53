// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hero section at the top of the home page.

use crate::app::Section;
use crate::models::profile;
use crate::ui::palette::{self, Palette};
use egui::RichText;

const AVATAR_SIZE: f32 = 128.0;

/// Display the hero. Returns the section a call-to-action asked to scroll to.
pub fn show(ui: &mut egui::Ui, palette: &Palette) -> Option<Section> {
    let mut target = None;

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);

        let (rect, _) = ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
        let painter = ui.painter();
        painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, palette.accent);
        painter.circle_filled(
            rect.center() + egui::vec2(AVATAR_SIZE / 6.0, AVATAR_SIZE / 6.0),
            AVATAR_SIZE / 3.0,
            palette::accent_at(palette, 0.8).gamma_multiply(0.6),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            profile::INITIALS,
            egui::FontId::proportional(44.0),
            egui::Color32::WHITE,
        );

        ui.add_space(28.0);
        ui.label(palette.heading(profile::NAME, 48.0));
        ui.add_space(12.0);
        ui.label(RichText::new(profile::TITLE).size(22.0).color(palette.text));
        ui.add_space(12.0);
        ui.label(RichText::new(profile::TAGLINE).size(16.0).color(palette.muted));
        ui.add_space(32.0);

        // Two 150pt buttons plus spacing
        let row_width = 316.0;
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            if ui.add(palette.primary_button("View Projects")).clicked() {
                target = Some(Section::Projects);
            }
            if ui.add(palette.secondary_button("Get in Touch")).clicked() {
                target = Some(Section::Contact);
            }
        });

        ui.add_space(40.0);
        let chevron = ui
            .add(egui::Button::new(RichText::new("⌄").size(28.0).color(palette.subtle)).frame(false))
            .on_hover_text("Scroll to about section");
        if chevron.clicked() {
            target = Some(Section::About);
        }
        ui.add_space(24.0);
    });

    target
}
