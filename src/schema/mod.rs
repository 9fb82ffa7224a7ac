//! Declarative schema for the signup form
//!
//! The schema turns an untyped [`FormInput`] into a typed [`FormData`] or a
//! [`ValidationErrors`] listing every failing field. The subscription branch
//! is a tagged union: `premiumFeatures` only exists inside
//! [`Subscription::Premium`].

mod email;
mod error;
mod path;
mod types;
mod validate;

pub use email::is_valid_email;
pub use error::{FieldError, FieldIssue, SchemaError, ValidationErrors};
pub use path::FieldPath;
pub use types::{FormData, FormInput, Hobby, HobbyInput, Subscription, SubscriptionType};
pub use validate::{validate, validate_json};
