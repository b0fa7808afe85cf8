//! Level and language path tokens.
//!
//! The archive encodes a document's level and language as fixed substrings of
//! its relative path (e.g. `001AL2020EV.pdf` is Higher Level, English
//! version). There is no structured field for either; matching is plain
//! substring containment against the path. Paths carrying [`BILINGUAL_TOKEN`]
//! satisfy any language filter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token satisfied by every language filter: the document covers both
/// languages in one file.
pub const BILINGUAL_TOKEN: &str = "BV";

/// Examination level, identified by its path token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Higher,
    Ordinary,
    Foundational,
    Common,
}

impl Level {
    /// All levels in display order.
    pub const fn all() -> &'static [Level] {
        &[Self::Higher, Self::Ordinary, Self::Foundational, Self::Common]
    }

    /// The token embedded in document paths for this level.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Higher => "AL",
            Self::Ordinary => "GL",
            Self::Foundational => "BL",
            Self::Common => "CL",
        }
    }

    /// Display name for UI.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Higher => "Higher Level",
            Self::Ordinary => "Ordinary Level",
            Self::Foundational => "Foundational Level",
            Self::Common => "Common Level",
        }
    }

    /// True when `path` carries this level's token.
    pub fn matches(&self, path: &str) -> bool {
        path.contains(self.token())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Language version, identified by its path token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Irish,
}

impl Language {
    /// All languages in display order.
    pub const fn all() -> &'static [Language] {
        &[Self::English, Self::Irish]
    }

    /// The token embedded in document paths for this language.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::English => "EV",
            Self::Irish => "IV",
        }
    }

    /// Display name for UI.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Irish => "Irish",
        }
    }

    /// True when `path` carries this language's token or the bilingual token.
    pub fn matches(&self, path: &str) -> bool {
        path.contains(self.token()) || path.contains(BILINGUAL_TOKEN)
    }

    /// True when `path` carries this language's own token, ignoring the
    /// bilingual fallback. Used to decide whether a language option is
    /// offered at all.
    pub fn appears_in(&self, path: &str) -> bool {
        path.contains(self.token())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
