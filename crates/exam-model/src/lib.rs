pub mod document;
pub mod exams;
pub mod options;
pub mod tokens;
pub mod url;

pub use document::{Document, Paper, PaperKind};
pub use exams::exam_label;
pub use options::Choice;
pub use tokens::{BILINGUAL_TOKEN, Language, Level};
pub use url::document_url;
