pub mod catalog;
pub mod error;

pub use catalog::{Catalog, CatalogSummary, YearDocuments};
pub use error::CatalogError;
