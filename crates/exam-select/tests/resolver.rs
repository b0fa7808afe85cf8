//! Scenario tests for the cascading resolver, driven through the real
//! catalog deserialization path.

use exam_catalog::Catalog;
use exam_model::document::PaperKind;
use exam_model::tokens::{Language, Level};
use exam_model::url::document_url;
use exam_select::{FieldChange, Selection, resolve};

fn fixture_catalog() -> Catalog {
    let json = r#"{
        "subjectCodeToName": {
            "001": "English",
            "002": "Irish",
            "003": "Mathematics",
            "005": "Geography"
        },
        "subjectNameToCodes": {
            "English": ["001"],
            "Irish": ["002"],
            "Mathematics": ["003"],
            "Geography": ["005"]
        },
        "lc": {
            "001": {
                "2020": {
                    "exampapers": [
                        {"relativePath": "001AL2020EV.pdf", "details": "Higher Level"}
                    ],
                    "markingschemes": [
                        {"relativePath": "001AL2020EV_MS.pdf", "details": "Higher Level"}
                    ]
                },
                "2019": {
                    "exampapers": [
                        {"relativePath": "001GL2019EV.pdf", "details": "Ordinary Level"}
                    ],
                    "markingschemes": []
                }
            },
            "002": {
                "2020": {
                    "exampapers": [
                        {"relativePath": "002AL2020IV.pdf", "details": "Higher Level"}
                    ],
                    "markingschemes": []
                }
            }
        },
        "jc": {
            "005": {
                "2021": {
                    "exampapers": [
                        {"relativePath": "005AL2021EV.pdf", "details": "Higher Level"}
                    ],
                    "markingschemes": []
                }
            },
            "003": {
                "2022": {
                    "exampapers": [
                        {"relativePath": "003CL2022BV.pdf", "details": "Common Level"}
                    ],
                    "markingschemes": []
                }
            }
        },
        "lb": {}
    }"#;
    Catalog::from_json_str(json, "fixture").expect("valid fixture catalog")
}

#[test]
fn initial_selection_is_consistent() {
    let catalog = fixture_catalog();
    let selection = Selection::initial(&catalog);

    assert_eq!(selection.exam, "lc");
    assert_eq!(selection.subject, "English");
    assert_eq!(selection.subjects, ["English", "Irish"]);
    assert_eq!(selection.year, "2020");
    assert_eq!(selection.years, ["2020", "2019"]);
    assert_eq!(selection.level, Some(Level::Higher));
    assert_eq!(selection.lang, Some(Language::English));
    assert_eq!(selection.papers.len(), 2);
}

#[test]
fn visible_papers_build_exact_archive_urls() {
    let catalog = fixture_catalog();
    let selection = Selection::initial(&catalog);

    let urls: Vec<String> = selection
        .papers
        .iter()
        .map(|p| document_url(p.kind, &selection.year, &p.relative_path))
        .collect();
    assert_eq!(
        urls,
        [
            "https://www.examinations.ie/archive/exampapers/2020/001AL2020EV.pdf",
            "https://www.examinations.ie/archive/markingschemes/2020/001AL2020EV_MS.pdf",
        ]
    );
}

#[test]
fn irish_toggle_is_disabled_without_irish_paths() {
    let catalog = fixture_catalog();
    let selection = Selection::initial(&catalog);

    let irish = selection
        .langs
        .iter()
        .find(|c| c.value == Language::Irish)
        .expect("irish choice present");
    assert!(irish.disabled);

    let english = selection
        .langs
        .iter()
        .find(|c| c.value == Language::English)
        .expect("english choice present");
    assert!(!english.disabled);
}

#[test]
fn selecting_a_disabled_language_converges_deterministically() {
    // The toggle is disabled in the UI; even if the change arrives anyway,
    // one resolver pass lands back on the first enabled language.
    let catalog = fixture_catalog();
    let initial = Selection::initial(&catalog);

    let after = resolve(&catalog, &initial, FieldChange::Lang(Language::Irish));
    assert_eq!(after.lang, Some(Language::English));
    assert_eq!(after.papers, initial.papers);
}

#[test]
fn year_change_recomputes_level_availability() {
    let catalog = fixture_catalog();
    let initial = Selection::initial(&catalog);

    // 2019 only has an Ordinary Level paper.
    let after = resolve(&catalog, &initial, FieldChange::Year("2019".to_string()));
    assert_eq!(after.year, "2019");
    assert_eq!(after.level, Some(Level::Ordinary));

    let higher = after
        .levels
        .iter()
        .find(|c| c.value == Level::Higher)
        .expect("higher choice present");
    assert!(higher.disabled);

    assert_eq!(after.papers.len(), 1);
    assert_eq!(after.papers[0].relative_path, "001GL2019EV.pdf");
    assert_eq!(after.papers[0].kind, PaperKind::ExamPaper);
}

#[test]
fn exam_switch_resets_subject_and_cascades() {
    let catalog = fixture_catalog();
    let initial = Selection::initial(&catalog);
    assert_eq!(initial.subject, "English");

    // English is not offered under jc: subject falls back to the first jc
    // subject and everything downstream follows.
    let after = resolve(&catalog, &initial, FieldChange::Exam("jc".to_string()));
    assert_eq!(after.exam, "jc");
    assert_eq!(after.subjects, ["Geography", "Mathematics"]);
    assert_eq!(after.subject, "Geography");
    assert_eq!(after.years, ["2021"]);
    assert_eq!(after.year, "2021");
    assert_eq!(after.level, Some(Level::Higher));
    assert_eq!(after.papers.len(), 1);
}

#[test]
fn subject_switch_auto_corrects_language() {
    let catalog = fixture_catalog();
    let initial = Selection::initial(&catalog);

    // Irish only exists as an Irish-language paper: English becomes
    // disabled and the selection follows the first enabled toggle.
    let after = resolve(&catalog, &initial, FieldChange::Subject("Irish".to_string()));
    assert_eq!(after.subject, "Irish");
    assert_eq!(after.years, ["2020"]);
    assert_eq!(after.lang, Some(Language::Irish));
    assert_eq!(after.papers.len(), 1);
    assert_eq!(after.papers[0].relative_path, "002AL2020IV.pdf");
}

#[test]
fn bilingual_year_shows_papers_with_both_toggles_disabled() {
    let catalog = fixture_catalog();
    let initial = Selection::initial(&catalog);

    let jc = resolve(&catalog, &initial, FieldChange::Exam("jc".to_string()));
    let maths = resolve(&catalog, &jc, FieldChange::Subject("Mathematics".to_string()));

    assert!(maths.langs.iter().all(|c| c.disabled));
    assert_eq!(maths.lang, None);
    assert_eq!(maths.level, Some(Level::Common));
    // The bilingual marker satisfies the language filter on its own.
    assert_eq!(maths.papers.len(), 1);
    assert_eq!(maths.papers[0].relative_path, "003CL2022BV.pdf");
}

#[test]
fn empty_exam_is_a_graceful_empty_state() {
    let catalog = fixture_catalog();
    let initial = Selection::initial(&catalog);

    let after = resolve(&catalog, &initial, FieldChange::Exam("lb".to_string()));
    assert_eq!(after.subject, "");
    assert!(after.subjects.is_empty());
    assert_eq!(after.year, "");
    assert!(after.years.is_empty());
    assert_eq!(after.level, None);
    assert_eq!(after.lang, None);
    assert!(after.papers.is_empty());
    assert!(after.levels.iter().all(|c| c.disabled));
}

#[test]
fn rederivation_is_idempotent() {
    let catalog = fixture_catalog();
    let initial = Selection::initial(&catalog);

    let once = resolve(&catalog, &initial, FieldChange::Year("2020".to_string()));
    let twice = resolve(&catalog, &once, FieldChange::Year("2020".to_string()));
    assert_eq!(once, twice);
    assert_eq!(once, initial);
}
