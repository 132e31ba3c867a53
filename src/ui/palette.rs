// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Colors and shared widgets for the light and dark themes.

use crate::theme::ThemeMode;
use egui::{Color32, Rect, RichText, Stroke};

const WHITE: Color32 = Color32::WHITE;
const SLATE_50: Color32 = Color32::from_rgb(248, 250, 252);
const SLATE_100: Color32 = Color32::from_rgb(241, 245, 249);
const SLATE_200: Color32 = Color32::from_rgb(226, 232, 240);
const SLATE_300: Color32 = Color32::from_rgb(203, 213, 225);
const SLATE_400: Color32 = Color32::from_rgb(148, 163, 184);
const SLATE_500: Color32 = Color32::from_rgb(100, 116, 139);
const SLATE_600: Color32 = Color32::from_rgb(71, 85, 105);
const SLATE_700: Color32 = Color32::from_rgb(51, 65, 85);
const SLATE_800: Color32 = Color32::from_rgb(30, 41, 59);
const SLATE_900: Color32 = Color32::from_rgb(15, 23, 42);
const SLATE_950: Color32 = Color32::from_rgb(2, 6, 23);
const BLUE_600: Color32 = Color32::from_rgb(37, 99, 235);
const VIOLET_600: Color32 = Color32::from_rgb(124, 58, 237);

/// Resolved colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub background: Color32,
    pub background_alt: Color32,
    pub card: Color32,
    pub heading: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub subtle: Color32,
    pub chip: Color32,
    pub chip_text: Color32,
    pub track: Color32,
    pub dot: Color32,
    pub accent: Color32,
    pub accent_alt: Color32,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                mode,
                background: SLATE_900,
                background_alt: SLATE_950,
                card: SLATE_800,
                heading: SLATE_100,
                text: SLATE_300,
                muted: SLATE_400,
                subtle: SLATE_500,
                chip: SLATE_700,
                chip_text: SLATE_300,
                track: SLATE_700,
                dot: SLATE_700,
                accent: BLUE_600,
                accent_alt: VIOLET_600,
            },
            ThemeMode::Light => Self {
                mode,
                background: WHITE,
                background_alt: SLATE_50,
                card: WHITE,
                heading: SLATE_900,
                text: SLATE_700,
                muted: SLATE_600,
                subtle: SLATE_400,
                chip: SLATE_200,
                chip_text: SLATE_700,
                track: SLATE_200,
                dot: SLATE_300,
                accent: BLUE_600,
                accent_alt: VIOLET_600,
            },
        }
    }

    /// egui visuals matching this palette.
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = match self.mode {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        };
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card;
        visuals.extreme_bg_color = self.background_alt;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = Stroke::new(1.0, WHITE);
        visuals
    }

    /// Frame for bento and project cards.
    pub fn card_frame(&self) -> egui::Frame {
        let frame = egui::Frame::none()
            .fill(self.card)
            .rounding(16.0)
            .inner_margin(24.0);
        match self.mode {
            ThemeMode::Light => frame.shadow(egui::Shadow {
                offset: egui::vec2(0.0, 6.0),
                blur: 18.0,
                spread: 0.0,
                color: Color32::from_black_alpha(24),
            }),
            ThemeMode::Dark => frame,
        }
    }

    /// A full-width section with the given background.
    pub fn section_frame(&self, alternate: bool) -> egui::Frame {
        let fill = if alternate { self.background_alt } else { self.background };
        egui::Frame::none()
            .fill(fill)
            .inner_margin(egui::Margin::symmetric(24.0, 64.0))
    }

    /// A rounded tag label, as used for tech stacks.
    pub fn chip(&self, ui: &mut egui::Ui, text: &str) -> egui::Response {
        egui::Frame::none()
            .fill(self.chip)
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(10.0, 4.0))
            .show(ui, |ui| {
                ui.label(RichText::new(text).strong().color(self.chip_text));
            })
            .response
    }

    pub fn heading(&self, text: &str, size: f32) -> RichText {
        RichText::new(text).size(size).strong().color(self.heading)
    }

    /// A primary call-to-action button.
    pub fn primary_button(&self, text: &str) -> egui::Button<'static> {
        egui::Button::new(RichText::new(text).size(16.0).strong().color(WHITE))
            .fill(self.accent)
            .rounding(10.0)
            .min_size(egui::vec2(150.0, 44.0))
    }

    /// A secondary button on the chip background.
    pub fn secondary_button(&self, text: &str) -> egui::Button<'static> {
        egui::Button::new(RichText::new(text).size(16.0).strong().color(self.heading))
            .fill(self.chip)
            .rounding(10.0)
            .min_size(egui::vec2(150.0, 44.0))
    }
}

/// Install the visuals for `mode` on the context.
pub fn apply(ctx: &egui::Context, mode: ThemeMode) {
    ctx.set_visuals(Palette::for_mode(mode).visuals());
}

/// Fill `rect` with a horizontal gradient from `left` to `right`.
pub fn gradient_rect(painter: &egui::Painter, rect: Rect, left: Color32, right: Color32) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Blend of the two accent colors at `t` in `[0, 1]`.
pub fn accent_at(palette: &Palette, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    let (a, b) = (palette.accent, palette.accent_alt);
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
