#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use exam_model::document::{Document, Paper, PaperKind};
use exam_model::exams;

use crate::error::CatalogError;

/// Document lists for one (exam, subject code, year) cell of the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YearDocuments {
    #[serde(default, rename = "exampapers")]
    pub exam_papers: Vec<Document>,
    #[serde(default, rename = "markingschemes")]
    pub marking_schemes: Vec<Document>,
}

/// subject code -> year -> documents
type SubjectYears = BTreeMap<String, BTreeMap<String, YearDocuments>>;

/// The static, immutable paper catalog: a nested exam -> subject code ->
/// year -> documents mapping plus a bidirectional subject code/name index.
/// Loaded and validated once at startup, never mutated.
///
/// On the wire the exam maps sit at the top level of the JSON object, next to
/// the two index tables; `serde(flatten)` picks them up.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(rename = "subjectCodeToName")]
    subject_code_to_name: BTreeMap<String, String>,
    #[serde(rename = "subjectNameToCodes")]
    subject_name_to_codes: BTreeMap<String, Vec<String>>,
    #[serde(flatten)]
    exams: BTreeMap<String, SubjectYears>,
}

/// Counts reported after a successful load, for startup logging and the
/// status footer.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct CatalogSummary {
    pub exam_count: usize,
    pub subject_code_count: usize,
    pub subject_name_count: usize,
    pub document_count: usize,
}

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

impl Catalog {
    /// Load the catalog bundled with the application.
    pub fn load_default() -> Result<Self, CatalogError> {
        let catalog = Self::from_json_str(BUNDLED_CATALOG, "bundled catalog")?;
        tracing::debug!(summary = ?catalog.summary(), "loaded bundled catalog");
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&contents, &path.display().to_string())
    }

    /// Parse and validate a catalog from a JSON string. `origin` names the
    /// source in parse errors.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json).map_err(|e| CatalogError::Json {
            origin: origin.to_string(),
            source: e,
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Structural checks a well-formed catalog must pass. Violations are
    /// fatal at startup: without them no meaningful default state exists.
    fn validate(&self) -> Result<(), CatalogError> {
        if self.exams.is_empty() {
            return Err(CatalogError::Empty);
        }
        if self.subject_code_to_name.is_empty() {
            return Err(CatalogError::NoSubjects);
        }

        for (exam, subjects) in &self.exams {
            for code in subjects.keys() {
                if !self.subject_code_to_name.contains_key(code) {
                    return Err(CatalogError::UnknownSubjectCode {
                        exam: exam.clone(),
                        code: code.clone(),
                    });
                }
            }
        }

        for (name, codes) in &self.subject_name_to_codes {
            for code in codes {
                match self.subject_code_to_name.get(code) {
                    None => {
                        return Err(CatalogError::UnindexedCode {
                            name: name.clone(),
                            code: code.clone(),
                        });
                    }
                    Some(mapped) if mapped != name => {
                        return Err(CatalogError::InconsistentIndex {
                            name: name.clone(),
                            code: code.clone(),
                            mapped: mapped.clone(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }

    /// Exam codes in display order: known exams first, anything else after,
    /// alphabetically.
    pub fn exam_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.exams.keys().map(String::as_str).collect();
        codes.sort_by_key(|code| (exams::display_rank(code), *code));
        codes
    }

    /// Sorted, duplicate-free subject names reachable from `exam`. Distinct
    /// codes sharing one display name collapse to a single entry.
    pub fn subject_names(&self, exam: &str) -> Vec<String> {
        let Some(subjects) = self.exams.get(exam) else {
            return Vec::new();
        };
        let names: BTreeSet<&str> = subjects
            .keys()
            .filter_map(|code| self.subject_code_to_name.get(code))
            .map(String::as_str)
            .collect();
        names.into_iter().map(str::to_string).collect()
    }

    /// The subject codes sharing a display name. Several codes per name
    /// arise from historical renumbering.
    pub fn codes_for_subject(&self, name: &str) -> &[String] {
        self.subject_name_to_codes
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Years with documents for `subject_name` under `exam`, unioned across
    /// every code sharing the name, sorted descending and deduplicated.
    pub fn years(&self, exam: &str, subject_name: &str) -> Vec<String> {
        let Some(subjects) = self.exams.get(exam) else {
            return Vec::new();
        };
        let mut years: BTreeSet<&str> = BTreeSet::new();
        for code in self.codes_for_subject(subject_name) {
            if let Some(by_year) = subjects.get(code) {
                years.extend(by_year.keys().map(String::as_str));
            }
        }
        years.into_iter().rev().map(str::to_string).collect()
    }

    /// Every document for (exam, subject name, year), unioned across codes
    /// sharing the name: exam papers first, then marking schemes, each kept
    /// in code order.
    pub fn papers(&self, exam: &str, subject_name: &str, year: &str) -> Vec<Paper> {
        let Some(subjects) = self.exams.get(exam) else {
            return Vec::new();
        };
        let mut exam_papers = Vec::new();
        let mut marking_schemes = Vec::new();
        for code in self.codes_for_subject(subject_name) {
            let Some(by_year) = subjects.get(code) else {
                continue;
            };
            let Some(documents) = by_year.get(year) else {
                continue;
            };
            exam_papers.extend(
                documents
                    .exam_papers
                    .iter()
                    .map(|d| Paper::from_document(PaperKind::ExamPaper, d)),
            );
            marking_schemes.extend(
                documents
                    .marking_schemes
                    .iter()
                    .map(|d| Paper::from_document(PaperKind::MarkingScheme, d)),
            );
        }
        exam_papers.extend(marking_schemes);
        exam_papers
    }

    pub fn summary(&self) -> CatalogSummary {
        let document_count = self
            .exams
            .values()
            .flat_map(BTreeMap::values)
            .flat_map(BTreeMap::values)
            .map(|docs| docs.exam_papers.len() + docs.marking_schemes.len())
            .sum();
        CatalogSummary {
            exam_count: self.exams.len(),
            subject_code_count: self.subject_code_to_name.len(),
            subject_name_count: self.subject_name_to_codes.len(),
            document_count,
        }
    }
}
