//! Main application struct and eframe::App implementation

use eframe::egui::{self, RichText};

use exam_catalog::Catalog;

use crate::settings::{Settings, save_settings};
use crate::state::AppState;
use crate::theme::{self, spacing};
use crate::views::{ControlsView, ResultsView};

/// Main application struct
pub struct ArchiveApp {
    state: AppState,
}

impl ArchiveApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog, settings: Settings) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply(&cc.egui_ctx, settings.general.dark_mode);

        Self {
            state: AppState::new(catalog, settings),
        }
    }
}

impl eframe::App for ArchiveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track the control interaction of this frame (at most one).
        let mut change = None;

        if self.state.settings_open {
            self.show_settings_window(ctx);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(spacing::MD);
            ui.horizontal(|ui| {
                ui.heading(
                    RichText::new(format!(
                        "{} Exam Archive",
                        egui_phosphor::regular::GRADUATION_CAP
                    ))
                    .size(24.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(egui_phosphor::regular::GEAR)
                        .on_hover_text("Settings")
                        .clicked()
                    {
                        self.state.open_settings();
                    }
                });
            });
            ui.label(
                RichText::new("Past papers and marking schemes from the State Examinations archive")
                    .weak(),
            );
            ui.add_space(spacing::SM);

            change = ControlsView::show(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let summary = &self.state.summary;
            ui.label(
                RichText::new(format!(
                    "{} documents · {} subjects · {} exams · links open on examinations.ie",
                    summary.document_count, summary.subject_name_count, summary.exam_count
                ))
                .weak()
                .small(),
            );
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ResultsView::show(ui, &self.state);
        });

        // Apply after the view borrows end: one synchronous cascade per
        // interaction, rendered next frame.
        if let Some(change) = change {
            self.state.apply(change);
        }
    }
}

impl ArchiveApp {
    /// Show the settings window; preference edits apply immediately and are
    /// persisted on change.
    fn show_settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.state.settings_open;
        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                let dark_mode = &mut self.state.settings.general.dark_mode;
                if ui.checkbox(dark_mode, "Dark mode").changed() {
                    theme::apply(ctx, *dark_mode);
                    if let Err(e) = save_settings(&self.state.settings) {
                        tracing::error!("Failed to save settings: {}", e);
                    }
                }
            });
        self.state.settings_open = open;
    }
}
