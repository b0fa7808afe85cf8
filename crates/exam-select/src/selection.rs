use serde::Serialize;

use exam_catalog::Catalog;
use exam_model::document::Paper;
use exam_model::options::Choice;
use exam_model::tokens::{Language, Level};

use crate::resolve::{FieldChange, resolve};

/// The one mutable entity in the system: the user's current filter choices
/// together with every list derived from them. All derived fields are kept
/// consistent by [`resolve`]; nothing mutates a `Selection` in place.
///
/// `level`/`lang` are `None` when every option is disabled for the current
/// (exam, subject, year): a valid empty state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub exam: String,
    /// Subject display name (codes stay inside the catalog).
    pub subject: String,
    pub year: String,
    pub level: Option<Level>,
    pub lang: Option<Language>,

    /// Subject names valid under `exam`, sorted.
    pub subjects: Vec<String>,
    /// Years valid under (`exam`, `subject`), newest first.
    pub years: Vec<String>,
    /// All levels, flagged disabled when no candidate document carries the
    /// level's path token.
    pub levels: Vec<Choice<Level>>,
    /// All languages, flagged the same way.
    pub langs: Vec<Choice<Language>>,
    /// The filtered, flattened visible documents.
    pub papers: Vec<Paper>,
}

impl Selection {
    /// Startup state: the catalog's first exam, Higher Level, English, then
    /// a full cascade to make every derived field consistent.
    pub fn initial(catalog: &Catalog) -> Self {
        let exam = catalog
            .exam_codes()
            .first()
            .map(|code| (*code).to_string())
            .unwrap_or_default();
        let seed = Self {
            exam: String::new(),
            subject: String::new(),
            year: String::new(),
            level: Some(Level::Higher),
            lang: Some(Language::English),
            subjects: Vec::new(),
            years: Vec::new(),
            levels: Vec::new(),
            langs: Vec::new(),
            papers: Vec::new(),
        };
        resolve(catalog, &seed, FieldChange::Exam(exam))
    }
}
