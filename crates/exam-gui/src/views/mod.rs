//! View components

mod controls;
mod results;

pub use controls::ControlsView;
pub use results::ResultsView;
