// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the theme store, the project catalog and
//! the carousel controller, routes between pages, and turns the actions
//! returned by the UI components into calls on the core types.

use crate::carousel::{clock::FrameClock, CarouselController};
use crate::io::media;
use crate::models::{catalog::Catalog, contact::ContactDraft};
use crate::settings::Settings;
use crate::theme::{SystemThemeWatcher, ThemeMode, ThemeStore};
use crate::ui::carousel::CarouselAction;
use crate::ui::palette::{self, Palette};
use crate::ui::{about, carousel, contact, footer, hero, navbar, projects};
use crate::util::{easing::ScrollAnimation, geometry};
use anyhow::{Context as _, Result};
use egui::RichText;
use std::time::Duration;

/// Top-level pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }
}

/// Scroll anchors on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        self as usize
    }
}

/// Main application state.
pub struct FolioApp {
    settings: Settings,

    /// Static project data shown by the carousel and the projects page
    catalog: Catalog,

    carousel: CarouselController,

    /// Frame clock feeding the carousel timers
    clock: FrameClock,

    theme: ThemeStore,
    system_theme: SystemThemeWatcher,

    current_page: Page,

    /// Card artwork textures, in catalog order
    artwork: Vec<egui::TextureHandle>,

    contact_draft: ContactDraft,

    /// Top of each home-page section inside the scroll area
    section_offsets: [f32; Section::COUNT],

    /// Home page scroll offset as of the last frame
    scroll_offset: f32,

    scroll_animation: Option<ScrollAnimation>,
}

impl FolioApp {
    /// Create a new Folio application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Result<Self> {
        let catalog = Catalog::builtin().context("Invalid built-in project catalog")?;
        let carousel = CarouselController::new(catalog.len(), settings.carousel)
            .context("Failed to create project carousel")?;

        let system = cc.integration_info.system_theme.map(ThemeMode::from);
        let mut theme = ThemeStore::initialize(system);
        palette::apply(&cc.egui_ctx, theme.mode());

        let ctx = cc.egui_ctx.clone();
        theme.subscribe(move |mode| {
            palette::apply(&ctx, mode);
            ctx.request_repaint();
        });

        let artwork = catalog
            .iter()
            .map(|project| {
                let image = media::placeholder_artwork(
                    &project.id,
                    media::ARTWORK_WIDTH,
                    media::ARTWORK_HEIGHT,
                );
                cc.egui_ctx.load_texture(
                    format!("artwork_{}", project.id),
                    image.to_color_image(),
                    egui::TextureOptions::LINEAR,
                )
            })
            .collect();

        log::info!("Loaded {} projects", catalog.len());

        Ok(Self {
            settings,
            catalog,
            carousel,
            clock: FrameClock::new(),
            theme,
            system_theme: SystemThemeWatcher::new(system),
            current_page: Page::Home,
            artwork,
            contact_draft: ContactDraft::new(),
            section_offsets: [0.0; Section::COUNT],
            scroll_offset: 0.0,
            scroll_animation: None,
        })
    }

    /// Export the catalog to a file.
    fn export_catalog(&self, path: std::path::PathBuf) {
        match crate::io::serialization::export_catalog(&self.catalog, &path) {
            Ok(_) => log::info!("Exported catalog to {}", path.display()),
            Err(e) => log::error!("Failed to export catalog: {}", e),
        }
    }

    /// Start a smooth scroll to a home-page section.
    fn scroll_to(&mut self, section: Section) {
        let target = self.section_offsets[section.index()];
        log::debug!("Scrolling to {:?} ({:.0} -> {:.0})", section, self.scroll_offset, target);
        self.scroll_animation = Some(ScrollAnimation::new(
            self.scroll_offset,
            target,
            Duration::from_millis(self.settings.scroll_duration_ms),
        ));
    }

    fn navigate_to(&mut self, page: Page) {
        if self.current_page != page {
            log::info!("Navigating to {}", page.label());
            self.current_page = page;
        }
        self.scroll_animation = None;
    }

    /// The long home page: hero, about, carousel, contact, footer.
    fn show_home(&mut self, ui: &mut egui::Ui, palette: &Palette) -> (Option<Section>, CarouselAction) {
        let dt = Duration::from_secs_f32(ui.input(|i| i.stable_dt).max(0.0));
        if ui.input(|i| i.raw_scroll_delta.y != 0.0) {
            // The user took over
            self.scroll_animation = None;
        }

        let mut area = egui::ScrollArea::vertical()
            .id_source("home")
            .auto_shrink([false, false]);
        if let Some(animation) = &mut self.scroll_animation {
            area = area.vertical_scroll_offset(animation.advance(dt));
        }

        let mut scroll_target = None;
        let mut action = CarouselAction::None;
        let mut carousel_visible = false;
        let snapshot = self.carousel.snapshot();
        let positions = self.carousel.positions();
        let threshold = self.settings.visibility_threshold;

        let output = area.show(ui, |ui| {
            let origin = ui.min_rect().top();

            self.section_offsets[Section::Hero.index()] = ui.cursor().top() - origin;
            palette.section_frame(false).show(ui, |ui| {
                ui.set_width(ui.available_width());
                scroll_target = hero::show(ui, palette);
            });

            self.section_offsets[Section::About.index()] = ui.cursor().top() - origin;
            palette.section_frame(true).show(ui, |ui| {
                ui.set_width(ui.available_width());
                about::show(ui, palette);
            });

            self.section_offsets[Section::Projects.index()] = ui.cursor().top() - origin;
            palette.section_frame(false).show(ui, |ui| {
                ui.set_width(ui.available_width());
                let (clicked, rect) =
                    carousel::show(ui, palette, &self.catalog, &snapshot, &positions, &self.artwork);
                action = clicked;
                carousel_visible = geometry::is_visible(rect, ui.clip_rect(), threshold);
            });

            self.section_offsets[Section::Contact.index()] = ui.cursor().top() - origin;
            palette.section_frame(true).show(ui, |ui| {
                ui.set_width(ui.available_width());
                contact::show_section(ui, palette);
            });

            footer::show(ui, palette);
        });

        self.scroll_offset = output.state.offset.y;
        if self.scroll_animation.as_ref().is_some_and(|a| a.is_finished()) {
            self.scroll_animation = None;
        }
        self.carousel.set_active(carousel_visible);

        (scroll_target, action)
    }

    /// A sub-page with a back link, its content and the footer.
    fn show_page(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let mut back = false;
        let page = self.current_page;

        egui::ScrollArea::vertical()
            .id_source(page.label())
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(48.0, 32.0))
                    .show(ui, |ui| {
                        if ui.link(RichText::new("← Back to Home").color(palette.text)).clicked() {
                            back = true;
                        }
                        ui.add_space(24.0);

                        match page {
                            Page::About => about::show(ui, palette),
                            Page::Projects => projects::show(ui, palette, &self.catalog, &self.artwork),
                            Page::Contact => contact::show_page(ui, palette, &mut self.contact_draft),
                            Page::Home => {}
                        }
                    });
                footer::show(ui, palette);
            });

        if back {
            self.navigate_to(Page::Home);
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Follow OS color-scheme changes
        let reported = frame.info().system_theme.map(ThemeMode::from);
        if let Some(mode) = self.system_theme.observe(reported) {
            log::info!("System theme changed to {:?}", mode);
            self.theme.on_system_preference_changed(mode);
        }

        // eframe installs its own visuals when the OS theme flips
        if ctx.style().visuals.dark_mode != self.theme.is_dark() {
            palette::apply(ctx, self.theme.mode());
        }

        self.carousel.pump(&mut self.clock);

        let palette = Palette::for_mode(self.theme.mode());

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.menu_button("Export Catalog", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("projects.yaml")
                                .save_file()
                            {
                                self.export_catalog(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("projects.json")
                                .save_file()
                            {
                                self.export_catalog(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Theme").clicked() {
                        self.theme.toggle();
                        ui.close_menu();
                    }
                    ui.separator();
                    for page in Page::ALL {
                        if ui.button(page.label()).clicked() {
                            self.navigate_to(page);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.navigate_to(Page::About);
                        ui.close_menu();
                    }
                });
            });
        });

        // Navigation bar
        let mut selected_page = self.current_page;
        egui::TopBottomPanel::top("navbar")
            .frame(
                egui::Frame::none()
                    .fill(palette.background)
                    .inner_margin(egui::Margin::symmetric(24.0, 12.0)),
            )
            .show(ctx, |ui| {
                navbar::show(ui, &mut selected_page, &mut self.theme);
            });
        if selected_page != self.current_page {
            self.navigate_to(selected_page);
        }

        // Arrow keys drive the carousel unless a text field has focus
        if self.current_page == Page::Home && !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
                self.carousel.prev();
            }
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
                self.carousel.next();
            }
        }

        if self.current_page != Page::Home {
            self.carousel.deactivate();
        }

        // Page content
        let palette = Palette::for_mode(self.theme.mode());
        let (scroll_target, carousel_action) = egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(palette.background))
            .show(ctx, |ui| {
                if self.current_page == Page::Home {
                    self.show_home(ui, &palette)
                } else {
                    self.show_page(ui, &palette);
                    (None, CarouselAction::None)
                }
            })
            .inner;

        // Handle carousel actions
        match carousel_action {
            CarouselAction::Prev => self.carousel.prev(),
            CarouselAction::Next => self.carousel.next(),
            CarouselAction::Goto(index) => {
                if let Err(e) = self.carousel.goto(index) {
                    log::warn!("Ignoring carousel jump: {}", e);
                }
            }
            CarouselAction::None => {}
        }

        if let Some(section) = scroll_target {
            self.scroll_to(section);
        }

        if self.scroll_animation.is_some() {
            ctx.request_repaint();
        } else if self.carousel.needs_time() {
            ctx.request_repaint_after(self.carousel.config().tick_interval());
        }
    }
}
