//! The selection controls row.
//!
//! Five controls bound to the current [`exam_select::Selection`]; every
//! interaction is reported back as a single `FieldChange` and applied by the
//! app after the view borrow ends.

use eframe::egui::{self, RichText, Ui};

use exam_model::exams;
use exam_select::FieldChange;

use crate::state::AppState;
use crate::theme::spacing;
use crate::widgets;

pub struct ControlsView;

impl ControlsView {
    /// Render the controls. Returns the change to apply, if any.
    pub fn show(ui: &mut Ui, state: &mut AppState) -> Option<FieldChange> {
        let mut change = None;
        let AppState {
            catalog,
            selection,
            subject_query,
            year_query,
            ..
        } = state;

        ui.add_space(spacing::SM);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = spacing::MD;

            // EXAM
            labeled(ui, "Exam", |ui| {
                egui::ComboBox::from_id_salt("exam")
                    .selected_text(exams::exam_label(&selection.exam))
                    .width(170.0)
                    .show_ui(ui, |ui| {
                        for code in catalog.exam_codes() {
                            let selected = code == selection.exam;
                            if ui.selectable_label(selected, exams::exam_label(code)).clicked()
                                && !selected
                            {
                                change = Some(FieldChange::Exam(code.to_string()));
                            }
                        }
                    });
            });

            // SUBJECT
            labeled(ui, "Subject", |ui| {
                if let Some(subject) = widgets::searchable_combo(
                    ui,
                    "subject",
                    220.0,
                    &selection.subject,
                    &selection.subjects,
                    subject_query,
                ) {
                    change = Some(FieldChange::Subject(subject));
                }
            });

            // YEAR
            labeled(ui, "Year", |ui| {
                if let Some(year) = widgets::searchable_combo(
                    ui,
                    "year",
                    110.0,
                    &selection.year,
                    &selection.years,
                    year_query,
                ) {
                    change = Some(FieldChange::Year(year));
                }
            });

            // LEVEL
            labeled(ui, "Level", |ui| {
                let selected_text = selection.level.map_or("—", |l| l.label());
                egui::ComboBox::from_id_salt("level")
                    .selected_text(selected_text)
                    .width(170.0)
                    .show_ui(ui, |ui| {
                        for choice in &selection.levels {
                            let selected = selection.level == Some(choice.value);
                            ui.add_enabled_ui(!choice.disabled, |ui| {
                                if ui.selectable_label(selected, choice.label.as_str()).clicked()
                                    && !selected
                                {
                                    change = Some(FieldChange::Level(choice.value));
                                }
                            });
                        }
                    });
            });

            // LANGUAGE
            labeled(ui, "Language", |ui| {
                ui.horizontal(|ui| {
                    for choice in &selection.langs {
                        let selected = selection.lang == Some(choice.value);
                        ui.add_enabled_ui(!choice.disabled, |ui| {
                            if ui.selectable_label(selected, choice.label.as_str()).clicked()
                                && !selected
                            {
                                change = Some(FieldChange::Lang(choice.value));
                            }
                        });
                    }
                });
            });
        });
        ui.add_space(spacing::SM);

        change
    }
}

/// A small weak caption above a control.
fn labeled(ui: &mut Ui, caption: &str, add_control: impl FnOnce(&mut Ui)) {
    ui.vertical(|ui| {
        ui.label(RichText::new(caption).small().weak());
        add_control(ui);
    });
}
