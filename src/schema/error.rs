//! Validation error types

use super::FieldPath;
use serde::Serialize;
use thiserror::Error;

/// The ways a single field can fail validation
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldIssue {
    #[error("Name is required")]
    NameRequired,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Please select a subscription type")]
    SubscriptionTypeRequired,
    #[error("Premium features are required")]
    PremiumFeaturesRequired,
    #[error("Hobby is required")]
    HobbyRequired,
}

impl FieldIssue {
    /// Human-readable message for this issue
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Serialize for FieldIssue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A failing field together with what is wrong with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Error)]
#[error("{path}: {issue}")]
pub struct FieldError {
    pub path: FieldPath,
    pub issue: FieldIssue,
}

impl FieldError {
    pub fn new(path: FieldPath, issue: FieldIssue) -> Self {
        Self { path, issue }
    }
}

/// Every field error produced by one validation pass, in validation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} field(s) failed validation", .errors.len())]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: FieldPath, issue: FieldIssue) {
        self.errors.push(FieldError::new(path, issue));
    }

    /// The issue reported for `path`, if any
    pub fn get(&self, path: &FieldPath) -> Option<FieldIssue> {
        self.errors
            .iter()
            .find(|e| &e.path == path)
            .map(|e| e.issue)
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn paths(&self) -> Vec<FieldPath> {
        self.errors.iter().map(|e| e.path).collect()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Failures that happen before field rules run
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The candidate value does not have the form's shape
    #[error("malformed form input: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unknown field path `{0}`")]
    UnknownPath(String),
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}
