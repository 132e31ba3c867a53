// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact section, social links and the mock email form.

use crate::models::contact::{ContactDraft, DEMO_NOTICE};
use crate::models::profile::{self, SocialLink};
use crate::ui::palette::Palette;
use egui::RichText;

/// Contact section at the bottom of the home page.
pub fn show_section(ui: &mut egui::Ui, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.label(palette.heading("Get in Touch", 40.0));
        ui.add_space(12.0);
        ui.label(
            RichText::new("Feel free to reach out for collaborations, opportunities, or just to connect")
                .size(18.0)
                .color(palette.muted),
        );
        ui.add_space(28.0);
        social_links(ui, palette);
    });
}

/// Contact page: social links followed by the mock form.
pub fn show_page(ui: &mut egui::Ui, palette: &Palette, draft: &mut ContactDraft) {
    ui.vertical_centered(|ui| {
        ui.label(palette.heading("Get In Touch", 48.0));
        ui.add_space(12.0);
        ui.label(
            RichText::new("Let's connect and discuss opportunities")
                .size(18.0)
                .color(palette.muted),
        );
        ui.add_space(28.0);
        social_links(ui, palette);
    });
    ui.add_space(40.0);

    palette.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        mock_form(ui, palette, draft);
    });
}

fn social_links(ui: &mut egui::Ui, palette: &Palette) {
    // Three 140pt buttons plus spacing
    let row_width = 3.0 * 140.0 + 2.0 * 12.0;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
        for link in &profile::SOCIAL_LINKS {
            social_button(ui, palette, link);
        }
    });
}

fn social_button(ui: &mut egui::Ui, palette: &Palette, link: &SocialLink) {
    let button = egui::Button::new(
        RichText::new(format!("{}  {}", link.icon, link.name))
            .size(16.0)
            .strong()
            .color(palette.heading),
    )
    .fill(palette.card)
    .rounding(12.0)
    .min_size(egui::vec2(140.0, 48.0));

    if link.is_placeholder() {
        ui.add_enabled(false, button)
            .on_disabled_hover_text("Not available yet");
        return;
    }

    let response = ui.add(button).on_hover_text(link.url);
    if response.clicked() {
        log::info!("Opening {} ({})", link.name, link.url);
        ui.ctx().open_url(egui::OpenUrl::new_tab(link.url));
    }
}

fn mock_form(ui: &mut egui::Ui, palette: &Palette, draft: &mut ContactDraft) {
    ui.label(palette.heading("Send a Message", 28.0));
    ui.add_space(20.0);

    let field_width = ui.available_width();
    let label = |ui: &mut egui::Ui, text: &str| {
        ui.label(RichText::new(text).strong().color(palette.text));
    };

    label(ui, "To");
    let mut recipient = profile::CONTACT_EMAIL;
    ui.add_enabled(
        false,
        egui::TextEdit::singleline(&mut recipient).desired_width(field_width),
    );
    ui.add_space(12.0);

    label(ui, "From");
    ui.add(
        egui::TextEdit::singleline(&mut draft.from)
            .hint_text("your.email@example.com")
            .desired_width(field_width),
    );
    ui.add_space(12.0);

    label(ui, "Subject");
    ui.add(
        egui::TextEdit::singleline(&mut draft.subject)
            .hint_text("What's this about?")
            .desired_width(field_width),
    );
    ui.add_space(12.0);

    label(ui, "Message");
    ui.add(
        egui::TextEdit::multiline(&mut draft.message)
            .hint_text("Your message here...")
            .desired_rows(8)
            .desired_width(field_width),
    );
    ui.add_space(20.0);

    let send = egui::Button::new(RichText::new("✉  Send Message").size(16.0).strong().color(egui::Color32::WHITE))
        .fill(palette.accent)
        .rounding(10.0)
        .min_size(egui::vec2(field_width, 44.0));
    if ui.add(send).clicked() {
        draft.submit();
    }
    ui.add_space(12.0);

    match draft.notice() {
        Some(notice) => {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("Not sent. {}", notice)).color(palette.accent));
                if ui.small_button("Clear").clicked() {
                    draft.clear();
                }
            });
        }
        None => {
            ui.label(RichText::new(DEMO_NOTICE).small().color(palette.subtle));
        }
    }
}
