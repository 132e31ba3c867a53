// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Featured-projects carousel.
//!
//! Draws the slides in their mapped 3D positions, the prev/next buttons,
//! the autoplay progress bar and the dot indicators. The view never
//! touches the controller; user input comes back as a [`CarouselAction`].

use crate::carousel::{CarouselSnapshot, SlidePosition};
use crate::models::catalog::Catalog;
use crate::models::project::Project;
use crate::ui::palette::{self, Palette};
use crate::util::geometry::project_rotated;
use egui::{Color32, Pos2, Rect, RichText};

const STAGE_HEIGHT: f32 = 500.0;
/// Stage width the slide offsets were designed for.
const DESIGN_WIDTH: f32 = 1100.0;
const CARD_MAX_WIDTH: f32 = 640.0;
const CARD_HEIGHT: f32 = 440.0;
const IMAGE_HEIGHT: f32 = 220.0;
const PERSPECTIVE: f32 = 2000.0;
const BUTTON_SIZE: f32 = 48.0;

/// Result of carousel interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    None,
    Prev,
    Next,
    Goto(usize),
}

/// Display the carousel. Returns the user's action and the rect the
/// carousel occupies, for viewport visibility checks.
pub fn show(
    ui: &mut egui::Ui,
    palette: &Palette,
    catalog: &Catalog,
    snapshot: &CarouselSnapshot,
    positions: &[SlidePosition],
    artwork: &[egui::TextureHandle],
) -> (CarouselAction, Rect) {
    let mut action = CarouselAction::None;
    let top = ui.cursor().top();

    ui.vertical_centered(|ui| {
        ui.label(palette.heading("Featured Projects", 40.0));
    });
    ui.add_space(32.0);

    let (stage, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), STAGE_HEIGHT),
        egui::Sense::hover(),
    );
    let offset_scale = (stage.width() / DESIGN_WIDTH).min(1.0);
    let card_width = (stage.width() * 0.9).min(CARD_MAX_WIDTH);

    // Back to front so the current slide is painted last
    let mut order: Vec<(usize, SlidePosition)> = positions
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, position)| position.is_visible())
        .collect();
    order.sort_by_key(|(_, position)| position.transform().z_index);

    for (index, position) in order {
        let Some(project) = catalog.get(index) else {
            continue;
        };
        let transform = position.transform();
        let center = Pos2::new(
            stage.center().x + transform.offset_x * offset_scale,
            stage.top() + CARD_HEIGHT / 2.0,
        );
        let card_rect = Rect::from_center_size(
            center,
            egui::vec2(card_width, CARD_HEIGHT) * transform.scale,
        );

        draw_card(
            ui,
            palette,
            card_rect,
            transform.rotate_y_deg,
            transform.opacity,
            artwork.get(index),
        );

        if position == SlidePosition::Current {
            // Swallow clicks so the neighbours underneath do not get them
            ui.interact(card_rect, ui.id().with(("slide", index)), egui::Sense::click());
            card_content(ui, palette, project, card_rect);
        } else if transform.interactive {
            let response = ui
                .interact(card_rect, ui.id().with(("slide", index)), egui::Sense::click())
                .on_hover_text(project.title.as_str());
            if response.clicked() {
                action = CarouselAction::Goto(index);
            }
        }
    }

    // Navigation buttons
    let button_y = stage.top() + CARD_HEIGHT / 2.0;
    let prev_rect = Rect::from_center_size(
        Pos2::new(stage.left() + 16.0 + BUTTON_SIZE / 2.0, button_y),
        egui::vec2(BUTTON_SIZE, BUTTON_SIZE),
    );
    let next_rect = Rect::from_center_size(
        Pos2::new(stage.right() - 16.0 - BUTTON_SIZE / 2.0, button_y),
        egui::vec2(BUTTON_SIZE, BUTTON_SIZE),
    );
    if nav_button(ui, palette, prev_rect, "◀")
        .on_hover_text("Previous project")
        .clicked()
    {
        action = CarouselAction::Prev;
    }
    if nav_button(ui, palette, next_rect, "▶")
        .on_hover_text("Next project")
        .clicked()
    {
        action = CarouselAction::Next;
    }

    // Progress bar
    ui.add_space(24.0);
    let (track, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 4.0), egui::Sense::hover());
    ui.painter().rect_filled(track, 2.0, palette.track);
    let fraction = snapshot.progress / 100.0;
    let mut fill = track;
    fill.set_width(track.width() * fraction);
    palette::gradient_rect(ui.painter(), fill, palette.accent, palette::accent_at(palette, fraction));

    // Dot indicators
    ui.add_space(24.0);
    if let Some(index) = dots(ui, palette, catalog.len(), snapshot.current_index) {
        action = CarouselAction::Goto(index);
    }

    if snapshot.paused {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("⏸ autoplay paused").small().color(palette.subtle));
        });
    }

    let rect = Rect::from_x_y_ranges(stage.x_range(), top..=ui.cursor().top());
    (action, rect)
}

/// Paint a card body and its artwork, turned by `rotate_y_deg`.
fn draw_card(
    ui: &egui::Ui,
    palette: &Palette,
    rect: Rect,
    rotate_y_deg: f32,
    opacity: f32,
    texture: Option<&egui::TextureHandle>,
) {
    if opacity <= 0.0 {
        return;
    }
    let painter = ui.painter();
    let [tl, tr, br, bl] = project_rotated(rect, rotate_y_deg, PERSPECTIVE);

    if rotate_y_deg == 0.0 {
        painter.rect_filled(rect, 16.0, palette.card.gamma_multiply(opacity));
    } else {
        painter.add(egui::Shape::convex_polygon(
            vec![tl, tr, br, bl],
            palette.card.gamma_multiply(opacity),
            egui::Stroke::NONE,
        ));
    }

    let split = IMAGE_HEIGHT / CARD_HEIGHT;
    let left_mid = tl.lerp(bl, split);
    let right_mid = tr.lerp(br, split);
    let tint = Color32::WHITE.gamma_multiply(opacity);

    match texture {
        Some(texture) => {
            let mut mesh = egui::Mesh::with_texture(texture.id());
            for (pos, uv) in [
                (tl, Pos2::new(0.0, 0.0)),
                (tr, Pos2::new(1.0, 0.0)),
                (right_mid, Pos2::new(1.0, 1.0)),
                (left_mid, Pos2::new(0.0, 1.0)),
            ] {
                mesh.vertices.push(egui::epaint::Vertex { pos, uv, color: tint });
            }
            mesh.add_triangle(0, 1, 2);
            mesh.add_triangle(0, 2, 3);
            painter.add(egui::Shape::mesh(mesh));
        }
        None => {
            painter.add(egui::Shape::convex_polygon(
                vec![tl, tr, right_mid, left_mid],
                palette.track.gamma_multiply(opacity),
                egui::Stroke::NONE,
            ));
        }
    }
}

/// Text shown on the front card only.
fn card_content(ui: &mut egui::Ui, palette: &Palette, project: &Project, card_rect: Rect) {
    let content_rect = Rect::from_min_max(
        Pos2::new(card_rect.left(), card_rect.top() + IMAGE_HEIGHT),
        card_rect.max,
    )
    .shrink(28.0);

    ui.allocate_ui_at_rect(content_rect, |ui| {
        ui.label(palette.heading(&project.title, 28.0));
        ui.add_space(10.0);
        ui.label(RichText::new(&project.description).size(16.0).color(palette.text));
        ui.add_space(14.0);
        ui.horizontal_wrapped(|ui| {
            for tech in &project.tech_stack {
                palette.chip(ui, tech);
            }
        });
    });
}

fn nav_button(ui: &mut egui::Ui, palette: &Palette, rect: Rect, icon: &str) -> egui::Response {
    let button = egui::Button::new(RichText::new(icon).size(18.0).color(palette.text))
        .fill(palette.card)
        .rounding(BUTTON_SIZE / 2.0);
    ui.put(rect, button)
}

/// Dot indicators; the current one is a wide accent pill.
fn dots(ui: &mut egui::Ui, palette: &Palette, len: usize, current: usize) -> Option<usize> {
    const DOT: f32 = 12.0;
    const ACTIVE_DOT: f32 = 32.0;
    const SPACING: f32 = 8.0;

    let total = ACTIVE_DOT + (len.saturating_sub(1)) as f32 * DOT + len.saturating_sub(1) as f32 * SPACING;
    let (row, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), DOT), egui::Sense::hover());

    let mut clicked = None;
    let mut x = row.center().x - total / 2.0;
    for index in 0..len {
        let width = if index == current { ACTIVE_DOT } else { DOT };
        let rect = Rect::from_min_size(Pos2::new(x, row.top()), egui::vec2(width, DOT));
        let response = ui
            .interact(rect, ui.id().with(("dot", index)), egui::Sense::click())
            .on_hover_text(format!("Go to project {}", index + 1));

        if index == current {
            palette::gradient_rect(ui.painter(), rect.shrink2(egui::vec2(DOT / 2.0, 0.0)), palette.accent, palette.accent_alt);
            ui.painter().circle_filled(rect.left_center() + egui::vec2(DOT / 2.0, 0.0), DOT / 2.0, palette.accent);
            ui.painter().circle_filled(rect.right_center() - egui::vec2(DOT / 2.0, 0.0), DOT / 2.0, palette.accent_alt);
        } else {
            let color = if response.hovered() { palette.subtle } else { palette.dot };
            ui.painter().circle_filled(rect.center(), DOT / 2.0, color);
        }

        if response.clicked() {
            clicked = Some(index);
        }
        x += width + SPACING;
    }
    clicked
}
