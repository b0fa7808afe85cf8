//! Order-insensitive invariants of the resolver, checked against random
//! change sequences over the bundled catalog.

use std::collections::BTreeSet;

use proptest::prelude::*;

use exam_catalog::Catalog;
use exam_model::tokens::{BILINGUAL_TOKEN, Language, Level};
use exam_select::{FieldChange, Selection, resolve};

fn bundled() -> Catalog {
    Catalog::load_default().expect("load bundled catalog")
}

/// Every exam code, subject name, and year in the catalog, plus values the
/// catalog does not know, so sequences also exercise the graceful paths.
fn change_strategy() -> impl Strategy<Value = FieldChange> {
    let catalog = bundled();

    let mut exams: Vec<String> = catalog
        .exam_codes()
        .iter()
        .map(|code| (*code).to_string())
        .collect();
    let mut subjects: BTreeSet<String> = BTreeSet::new();
    let mut years: BTreeSet<String> = BTreeSet::new();
    for exam in catalog.exam_codes() {
        for subject in catalog.subject_names(exam) {
            years.extend(catalog.years(exam, &subject));
            subjects.insert(subject);
        }
    }
    exams.push("zz".to_string());
    subjects.insert("No Such Subject".to_string());
    years.insert("1900".to_string());

    let subjects: Vec<String> = subjects.into_iter().collect();
    let years: Vec<String> = years.into_iter().collect();
    let levels: Vec<Level> = Level::all().to_vec();
    let langs: Vec<Language> = Language::all().to_vec();

    prop_oneof![
        proptest::sample::select(exams).prop_map(FieldChange::Exam),
        proptest::sample::select(subjects).prop_map(FieldChange::Subject),
        proptest::sample::select(years).prop_map(FieldChange::Year),
        proptest::sample::select(levels).prop_map(FieldChange::Level),
        proptest::sample::select(langs).prop_map(FieldChange::Lang),
    ]
}

fn assert_invariants(catalog: &Catalog, selection: &Selection) {
    // Subject and year are members of their lists, or the deterministic
    // empty fallback.
    if selection.subjects.is_empty() {
        assert_eq!(selection.subject, "");
    } else {
        assert!(selection.subjects.contains(&selection.subject));
    }
    if selection.years.is_empty() {
        assert_eq!(selection.year, "");
    } else {
        assert!(selection.years.contains(&selection.year));
    }

    // Subjects sorted ascending and unique; years descending and unique.
    assert!(selection.subjects.windows(2).all(|w| w[0] < w[1]));
    assert!(selection.years.windows(2).all(|w| w[0] > w[1]));

    // The subject list matches the catalog exactly.
    assert_eq!(selection.subjects, catalog.subject_names(&selection.exam));
    assert_eq!(
        selection.years,
        catalog.years(&selection.exam, &selection.subject)
    );

    // A selected option is always enabled; None means nothing was.
    match selection.level {
        Some(level) => assert!(
            selection
                .levels
                .iter()
                .any(|c| c.value == level && !c.disabled)
        ),
        None => assert!(selection.levels.iter().all(|c| c.disabled)),
    }
    match selection.lang {
        Some(lang) => assert!(
            selection
                .langs
                .iter()
                .any(|c| c.value == lang && !c.disabled)
        ),
        None => assert!(selection.langs.iter().all(|c| c.disabled)),
    }

    // Every visible path encodes the current level and satisfies the
    // language filter (own token or the bilingual marker).
    for paper in &selection.papers {
        let level = selection.level.expect("papers imply a selected level");
        assert!(level.matches(&paper.relative_path));
        match selection.lang {
            Some(lang) => assert!(lang.matches(&paper.relative_path)),
            None => assert!(paper.relative_path.contains(BILINGUAL_TOKEN)),
        }
    }
}

proptest! {
    #[test]
    fn cascades_preserve_invariants(changes in proptest::collection::vec(change_strategy(), 1..12)) {
        let catalog = bundled();
        let mut selection = Selection::initial(&catalog);
        assert_invariants(&catalog, &selection);

        for change in changes {
            selection = resolve(&catalog, &selection, change);
            assert_invariants(&catalog, &selection);
        }
    }

    #[test]
    fn rederiving_the_current_year_is_identity(changes in proptest::collection::vec(change_strategy(), 1..8)) {
        let catalog = bundled();
        let mut selection = Selection::initial(&catalog);
        for change in changes {
            selection = resolve(&catalog, &selection, change);
        }

        if !selection.year.is_empty() {
            let rederived = resolve(&catalog, &selection, FieldChange::Year(selection.year.clone()));
            prop_assert_eq!(&rederived, &selection);
        }
    }
}
