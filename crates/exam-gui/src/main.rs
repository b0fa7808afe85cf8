//! Exam Archive - Desktop GUI Application
//!
//! A desktop browser for the State Examinations archive: filter past exam
//! papers and marking schemes by exam, subject, year, level, and language,
//! and open them on the archive host.

use eframe::egui;

use exam_catalog::Catalog;
use exam_gui::app::ArchiveApp;
use exam_gui::settings::load_settings;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Without a valid catalog there is no meaningful default state to
    // render: refuse to start instead of showing a broken window.
    let catalog = match Catalog::load_default() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("cannot start without a valid catalog: {e}");
            std::process::exit(1);
        }
    };
    let summary = catalog.summary();
    tracing::info!(
        exams = summary.exam_count,
        subjects = summary.subject_name_count,
        documents = summary.document_count,
        "catalog loaded"
    );

    let settings = load_settings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Exam Archive")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([860.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Exam Archive",
        options,
        Box::new(move |cc| Ok(Box::new(ArchiveApp::new(cc, catalog, settings)))),
    )
}
