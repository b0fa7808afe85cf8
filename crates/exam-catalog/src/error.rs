#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog from {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog contains no exams")]
    Empty,

    #[error("catalog contains no subject codes")]
    NoSubjects,

    #[error("exam {exam} lists subject code {code} missing from subjectCodeToName")]
    UnknownSubjectCode { exam: String, code: String },

    #[error("subjectNameToCodes lists {code} under \"{name}\" but subjectCodeToName has no entry for it")]
    UnindexedCode { name: String, code: String },

    #[error("subjectNameToCodes lists {code} under \"{name}\" but subjectCodeToName maps it to \"{mapped}\"")]
    InconsistentIndex {
        name: String,
        code: String,
        mapped: String,
    },
}
