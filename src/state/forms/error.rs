//! Form controller errors

use super::{FieldKey, HobbyId};
use crate::schema::FieldPath;
use thiserror::Error;

/// Misuse of the controller's binding or list operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The field exists in the schema but is not currently shown
    #[error("field `{0}` is not rendered")]
    NotRendered(FieldPath),
    #[error("hobby index {index} is out of range (len {len})")]
    HobbyIndexOutOfRange { index: usize, len: usize },
    #[error("hobby entry {0} no longer exists")]
    StaleHobby(HobbyId),
    #[error("value does not fit field {}", .0.label())]
    TypeMismatch(FieldKey),
}
