//! The result card grid.

use eframe::egui::{self, Color32, RichText, Ui};

use exam_model::document::{Paper, PaperKind};
use exam_model::url::document_url;

use crate::state::AppState;
use crate::theme::{colors, spacing};

const CARD_WIDTH: f32 = 260.0;

pub struct ResultsView;

impl ResultsView {
    /// Render the visible papers as a wrapping grid of clickable cards.
    pub fn show(ui: &mut Ui, state: &AppState) {
        let selection = &state.selection;

        if selection.papers.is_empty() {
            ui.add_space(spacing::XL);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} No papers match the current selection",
                        egui_phosphor::regular::FILE_X
                    ))
                    .weak(),
                );
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(spacing::MD);
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(spacing::MD, spacing::MD);
                    for (index, paper) in selection.papers.iter().enumerate() {
                        ui.push_id(index, |ui| {
                            let response =
                                card(ui, paper, &selection.subject, &selection.year);
                            if response.clicked() {
                                let url = document_url(
                                    paper.kind,
                                    &selection.year,
                                    &paper.relative_path,
                                );
                                tracing::debug!(%url, "opening document");
                                ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                            }
                        });
                    }
                });
            });
    }
}

/// One result card: a kind-colored band over subject, details, and year.
/// The whole card is one click target.
fn card(ui: &mut Ui, paper: &Paper, subject: &str, year: &str) -> egui::Response {
    let band = match paper.kind {
        PaperKind::ExamPaper => colors::EXAM_PAPER,
        PaperKind::MarkingScheme => colors::MARKING_SCHEME,
    };

    let response = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::ZERO)
        .corner_radius(6)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.spacing_mut().item_spacing.y = 0.0;

            egui::Frame::new()
                .fill(band)
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new(paper.kind.label())
                            .strong()
                            .color(Color32::WHITE)
                            .size(16.0),
                    );
                });

            egui::Frame::new()
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(subject).strong());
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(RichText::new(&paper.details).weak().small());
                            },
                        );
                    });
                    ui.add_space(spacing::XS);
                    ui.label(year);
                });
        })
        .response;

    response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
