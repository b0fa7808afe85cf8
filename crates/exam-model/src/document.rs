use serde::{Deserialize, Serialize};
use std::fmt;

/// The two document kinds published in the archive. Each kind lives under its
/// own path segment on the archive host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperKind {
    ExamPaper,
    MarkingScheme,
}

impl PaperKind {
    /// Display name shown on result cards.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ExamPaper => "Exam Paper",
            Self::MarkingScheme => "Marking Scheme",
        }
    }

    /// Path segment used by the archive host for this kind.
    pub const fn archive_segment(&self) -> &'static str {
        match self {
            Self::ExamPaper => "exampapers",
            Self::MarkingScheme => "markingschemes",
        }
    }
}

impl fmt::Display for PaperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single archived document as it appears in the catalog. Identity is
/// structural; documents carry no lifecycle of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Relative path on the archive host. Encodes level and language tokens,
    /// see [`crate::tokens`].
    pub relative_path: String,
    /// Free-form description, e.g. "Higher Level Paper One".
    pub details: String,
}

/// A catalog document tagged with its kind, as produced by filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub kind: PaperKind,
    pub relative_path: String,
    pub details: String,
}

impl Paper {
    pub fn from_document(kind: PaperKind, document: &Document) -> Self {
        Self {
            kind,
            relative_path: document.relative_path.clone(),
            details: document.details.clone(),
        }
    }
}
