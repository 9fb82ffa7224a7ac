//! Form field value objects

use super::HobbyId;
use crate::schema::{FieldPath, SubscriptionType};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(SubscriptionType),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (empty for non-text fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) | FieldValue::Flag(_) => "",
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

/// A field bound to the live buffer
///
/// Hobby bindings hold the entry's stable id rather than its position, so they
/// stay attached to the same row when other rows are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Email,
    SubscriptionType,
    PremiumFeatures,
    Hobby(HobbyId),
    Newsletter,
}

impl FieldKey {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Email => "Email",
            FieldKey::SubscriptionType => "Subscription Type",
            FieldKey::PremiumFeatures => "Premium Features Description",
            FieldKey::Hobby(_) => "Hobby",
            FieldKey::Newsletter => "Sign up for our newsletter (optional)",
        }
    }

    /// Whether the field takes typed text
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FieldKey::Name | FieldKey::Email | FieldKey::PremiumFeatures | FieldKey::Hobby(_)
        )
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKey::PremiumFeatures)
    }

    /// The path of a non-list field; hobby keys need the list to resolve
    pub fn scalar_path(&self) -> Option<FieldPath> {
        match self {
            FieldKey::Name => Some(FieldPath::Name),
            FieldKey::Email => Some(FieldPath::Email),
            FieldKey::SubscriptionType => Some(FieldPath::SubscriptionType),
            FieldKey::PremiumFeatures => Some(FieldPath::PremiumFeatures),
            FieldKey::Newsletter => Some(FieldPath::Newsletter),
            FieldKey::Hobby(_) => None,
        }
    }
}
