pub mod resolve;
pub mod selection;

pub use resolve::{FieldChange, resolve};
pub use selection::Selection;
