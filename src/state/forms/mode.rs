//! When fields are validated

use serde::{Deserialize, Serialize};

/// Trigger for per-field validation before the first submit
///
/// After a submit attempt, edited fields are always re-validated on change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    OnSubmit,
    OnBlur,
    OnChange,
    All,
}

impl ValidationMode {
    pub fn validates_on_change(self) -> bool {
        matches!(self, ValidationMode::OnChange | ValidationMode::All)
    }

    pub fn validates_on_blur(self) -> bool {
        matches!(self, ValidationMode::OnBlur | ValidationMode::All)
    }

    /// Cycle through the modes in declaration order
    pub fn next(self) -> Self {
        match self {
            ValidationMode::OnSubmit => ValidationMode::OnBlur,
            ValidationMode::OnBlur => ValidationMode::OnChange,
            ValidationMode::OnChange => ValidationMode::All,
            ValidationMode::All => ValidationMode::OnSubmit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ValidationMode::OnSubmit => "on submit",
            ValidationMode::OnBlur => "on blur",
            ValidationMode::OnChange => "on change",
            ValidationMode::All => "on blur + change",
        }
    }
}
