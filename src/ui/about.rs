// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! "About me" bento grid.

use crate::models::profile::{self, FactCard};
use crate::ui::palette::Palette;
use egui::RichText;

const GAP: f32 = 16.0;

/// Display the bento grid: bio and highlight, three fact cards, tech stack.
pub fn show(ui: &mut egui::Ui, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.label(palette.heading("About Me", 40.0));
    });
    ui.add_space(32.0);

    let width = ui.available_width();
    let third = (width - 2.0 * GAP) / 3.0;

    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = GAP;
        ui.allocate_ui(egui::vec2(2.0 * third + GAP, 0.0), |ui| {
            palette.card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(palette.heading(&format!("Hi, I'm {}", profile::FIRST_NAME), 26.0));
                ui.add_space(12.0);
                ui.label(RichText::new(profile::BIO).size(16.0).color(palette.text));
            });
        });
        ui.allocate_ui(egui::vec2(third, 0.0), |ui| {
            palette.card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let highlight = profile::HIGHLIGHT;
                    ui.label(RichText::new(highlight.value).size(52.0).strong().color(palette.accent));
                    ui.label(RichText::new(highlight.label).strong().color(palette.text));
                    ui.label(RichText::new(highlight.detail).small().color(palette.muted));
                });
            });
        });
    });

    ui.add_space(GAP);
    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = GAP;
        for fact in &profile::FACTS {
            ui.allocate_ui(egui::vec2(third, 0.0), |ui| fact_card(ui, palette, fact));
        }
    });

    ui.add_space(GAP);
    palette.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(palette.heading("Tech Stack", 20.0));
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for tech in profile::TECH_STACK {
                palette.chip(ui, tech);
            }
        });
    });
}

fn fact_card(ui: &mut egui::Ui, palette: &Palette, fact: &FactCard) {
    palette.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(palette.heading(fact.title, 20.0));
        ui.add_space(8.0);
        ui.label(RichText::new(fact.body).color(palette.text));
        if let Some(note) = fact.note {
            ui.label(RichText::new(note).small().color(palette.muted));
        }
    });
}
