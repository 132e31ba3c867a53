// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Projects page: every catalog entry with its full details.

use crate::models::catalog::Catalog;
use crate::models::project::Project;
use crate::ui::palette::Palette;
use egui::RichText;

const THUMB_SIZE: egui::Vec2 = egui::vec2(320.0, 160.0);

/// Display the projects page.
pub fn show(ui: &mut egui::Ui, palette: &Palette, catalog: &Catalog, artwork: &[egui::TextureHandle]) {
    ui.vertical_centered(|ui| {
        ui.label(palette.heading("Projects", 48.0));
        ui.add_space(12.0);
        ui.label(
            RichText::new(
                "A collection of my work in quantitative finance, machine learning, and systems programming",
            )
            .size(18.0)
            .color(palette.muted),
        );
    });
    ui.add_space(40.0);

    for (index, project) in catalog.iter().enumerate() {
        project_card(ui, palette, project, artwork.get(index));
        ui.add_space(24.0);
    }
}

fn project_card(
    ui: &mut egui::Ui,
    palette: &Palette,
    project: &Project,
    texture: Option<&egui::TextureHandle>,
) {
    palette.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            match texture {
                Some(texture) => {
                    ui.add(egui::Image::new((texture.id(), THUMB_SIZE)).rounding(12.0));
                }
                None => {
                    let (rect, _) = ui.allocate_exact_size(THUMB_SIZE, egui::Sense::hover());
                    ui.painter().rect_filled(rect, 12.0, palette.track);
                }
            }
            ui.add_space(16.0);

            ui.vertical(|ui| {
                ui.label(palette.heading(&project.title, 28.0));
                ui.add_space(8.0);
                ui.label(RichText::new(&project.extended_description).size(16.0).color(palette.text));
                ui.add_space(12.0);

                if !project.key_features.is_empty() {
                    ui.label(RichText::new("Key Features:").strong().color(palette.heading));
                    for feature in &project.key_features {
                        ui.label(RichText::new(format!("•  {}", feature)).color(palette.text));
                    }
                    ui.add_space(12.0);
                }

                ui.horizontal_wrapped(|ui| {
                    for tech in &project.tech_stack {
                        palette.chip(ui, tech);
                    }
                });
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.hyperlink_to(RichText::new("GitHub ↗").strong(), &project.github_url);
                    if let Some(live_url) = &project.live_url {
                        ui.separator();
                        ui.hyperlink_to(RichText::new("Live Demo ↗").strong(), live_url);
                    }
                });
            });
        });
    });
}
