//! Theme and styling constants

use eframe::egui;

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Card band colors, carried over from the archive's original palette.
pub mod colors {
    use eframe::egui::Color32;

    pub const EXAM_PAPER: Color32 = Color32::from_rgb(33, 150, 243);
    pub const MARKING_SCHEME: Color32 = Color32::from_rgb(245, 0, 87);
}

/// Switch the whole context between light and dark visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
