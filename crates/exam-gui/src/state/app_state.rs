//! Application-level state

use exam_catalog::{Catalog, CatalogSummary};
use exam_select::{FieldChange, Selection, resolve};

use crate::settings::Settings;

/// Top-level application state: the immutable catalog, the one mutable
/// selection, and display preferences.
pub struct AppState {
    pub catalog: Catalog,
    pub summary: CatalogSummary,
    pub selection: Selection,
    pub settings: Settings,
    /// Settings window visibility
    pub settings_open: bool,
    /// Filter text inside the subject combo popup
    pub subject_query: String,
    /// Filter text inside the year combo popup
    pub year_query: String,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        let selection = Selection::initial(&catalog);
        let summary = catalog.summary();
        Self {
            catalog,
            summary,
            selection,
            settings,
            settings_open: false,
            subject_query: String::new(),
            year_query: String::new(),
        }
    }

    /// Run one synchronous resolver pass; the next frame renders the
    /// resulting state.
    pub fn apply(&mut self, change: FieldChange) {
        self.selection = resolve(&self.catalog, &self.selection, change);
        self.subject_query.clear();
        self.year_query.clear();
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }
}
