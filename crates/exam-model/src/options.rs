use serde::{Deserialize, Serialize};

/// A selectable option as presented by the UI: an explicit tagged record
/// rather than a bare value, so availability travels with the option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
    pub disabled: bool,
}

impl<T> Choice<T> {
    pub fn enabled(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }
}
