use crate::document::PaperKind;

/// Host serving the archived documents. Links must reproduce this template
/// exactly or they will not resolve.
pub const ARCHIVE_BASE: &str = "https://www.examinations.ie/archive";

/// Build the absolute URL for a document: the kind-specific segment, the
/// selected year, then the document's relative path.
pub fn document_url(kind: PaperKind, year: &str, relative_path: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        ARCHIVE_BASE,
        kind.archive_segment(),
        year,
        relative_path
    )
}
