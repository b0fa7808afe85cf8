//! Small reusable widgets.

use eframe::egui::{self, Ui};

/// A dropdown whose popup embeds a filter field and the matching options:
/// egui's rendering of a type-ahead combo box.
///
/// Typing an exact option value selects it immediately, so a year can be
/// entered on the keyboard; Enter selects when exactly one option matches.
/// Returns the picked value, if any.
pub fn searchable_combo(
    ui: &mut Ui,
    id_salt: &str,
    width: f32,
    current: &str,
    options: &[String],
    query: &mut String,
) -> Option<String> {
    let mut picked = None;

    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(if current.is_empty() { "—" } else { current })
        .width(width)
        .show_ui(ui, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(query)
                    .hint_text("Type to filter")
                    .desired_width(f32::INFINITY),
            );

            if response.changed() && options.iter().any(|o| o.as_str() == query.as_str()) {
                picked = Some(query.clone());
            }

            let needle = query.to_lowercase();
            let matches: Vec<&String> = options
                .iter()
                .filter(|o| o.to_lowercase().contains(&needle))
                .collect();

            if response.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                && matches.len() == 1
            {
                picked = Some(matches[0].clone());
            }

            ui.separator();
            egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                if matches.is_empty() {
                    ui.weak("No matches");
                }
                for option in matches {
                    let selected = option.as_str() == current;
                    if ui.selectable_label(selected, option.as_str()).clicked() && !selected {
                        picked = Some(option.clone());
                    }
                }
            });
        });

    picked
}
