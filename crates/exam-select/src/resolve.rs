//! The cascading selection resolver.
//!
//! A field change enters the pipeline at its own stage and runs every stage
//! downstream of it, in a fixed order:
//!
//! ```text
//! exam -> subject -> year -> {level, lang} -> papers
//! ```
//!
//! One synchronous pass per change; the result is fully consistent, with no
//! intermediate states.

use exam_catalog::Catalog;
use exam_model::options::Choice;
use exam_model::tokens::{BILINGUAL_TOKEN, Language, Level};

use crate::selection::Selection;

/// A single user edit to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Exam(String),
    /// Subject display name.
    Subject(String),
    Year(String),
    Level(Level),
    Lang(Language),
}

/// Apply one field change and re-derive everything downstream of it.
/// Pure: the previous selection is never mutated.
pub fn resolve(catalog: &Catalog, previous: &Selection, change: FieldChange) -> Selection {
    let mut next = previous.clone();
    match change {
        FieldChange::Exam(exam) => {
            next.exam = exam;
            derive_subjects(catalog, &mut next);
            derive_years(catalog, &mut next);
            derive_papers(catalog, &mut next);
        }
        FieldChange::Subject(subject) => {
            next.subject = subject;
            derive_years(catalog, &mut next);
            derive_papers(catalog, &mut next);
        }
        FieldChange::Year(year) => {
            next.year = year;
            derive_papers(catalog, &mut next);
        }
        FieldChange::Level(level) => {
            next.level = Some(level);
            derive_papers(catalog, &mut next);
        }
        FieldChange::Lang(lang) => {
            next.lang = Some(lang);
            derive_papers(catalog, &mut next);
        }
    }
    next
}

/// Recompute the subject list for the current exam; fall back to the first
/// entry when the previous subject is no longer offered.
fn derive_subjects(catalog: &Catalog, selection: &mut Selection) {
    selection.subjects = catalog.subject_names(&selection.exam);
    if !selection.subjects.iter().any(|s| *s == selection.subject) {
        selection.subject = selection.subjects.first().cloned().unwrap_or_default();
    }
}

/// Recompute the year list for the current (exam, subject); fall back to the
/// newest year when the previous one is absent.
fn derive_years(catalog: &Catalog, selection: &mut Selection) {
    selection.years = catalog.years(&selection.exam, &selection.subject);
    if !selection.years.iter().any(|y| *y == selection.year) {
        selection.year = selection.years.first().cloned().unwrap_or_default();
    }
}

/// The filter stage: availability flags, auto-correction, and the visible
/// paper list, all from the candidate documents at (exam, subject, year).
fn derive_papers(catalog: &Catalog, selection: &mut Selection) {
    let candidates = catalog.papers(&selection.exam, &selection.subject, &selection.year);

    selection.levels = Level::all()
        .iter()
        .map(|&level| Choice {
            value: level,
            label: level.label().to_string(),
            disabled: !candidates.iter().any(|p| level.matches(&p.relative_path)),
        })
        .collect();
    selection.level = corrected(selection.level, &selection.levels);

    // Availability looks at a language's own token only; the bilingual
    // marker makes a document visible but does not offer the toggle.
    selection.langs = Language::all()
        .iter()
        .map(|&lang| Choice {
            value: lang,
            label: lang.label().to_string(),
            disabled: !candidates.iter().any(|p| lang.appears_in(&p.relative_path)),
        })
        .collect();
    selection.lang = corrected(selection.lang, &selection.langs);

    let level = selection.level;
    let lang = selection.lang;
    selection.papers = candidates
        .into_iter()
        .filter(|p| {
            let level_ok = level.is_some_and(|l| l.matches(&p.relative_path));
            let lang_ok = match lang {
                Some(l) => l.matches(&p.relative_path),
                // All toggles disabled: only bilingual documents remain.
                None => p.relative_path.contains(BILINGUAL_TOKEN),
            };
            level_ok && lang_ok
        })
        .collect();
}

/// Keep the current value when it is still enabled; otherwise the first
/// non-disabled option, or None when everything is disabled.
fn corrected<T: Copy + PartialEq>(current: Option<T>, choices: &[Choice<T>]) -> Option<T> {
    let still_valid = current.is_some_and(|value| {
        choices
            .iter()
            .any(|c| c.value == value && !c.disabled)
    });
    if still_valid {
        current
    } else {
        choices.iter().find(|c| !c.disabled).map(|c| c.value)
    }
}
