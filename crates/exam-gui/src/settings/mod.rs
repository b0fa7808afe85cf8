//! Settings types and configuration for the Exam Archive GUI.
//!
//! Only display preferences are persisted; the filter selection itself
//! lives and dies with the session.

mod persistence;

pub use persistence::{load_settings, save_settings, settings_path};

use serde::{Deserialize, Serialize};

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
}

/// General application preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}
