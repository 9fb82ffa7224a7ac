//! Form domain layer
//!
//! The [`FormController`] owns the live edit buffer, per-field errors and the
//! hobby list, and runs the schema on change, blur or submit.

mod controller;
mod error;
mod field;
mod hobbies;
mod mode;

pub use controller::{FormController, SubmitOutcome};
pub use error::FormError;
pub use field::{FieldKey, FieldValue};
pub use hobbies::{HobbyEntry, HobbyId, HobbyList};
pub use mode::ValidationMode;
