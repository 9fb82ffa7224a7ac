//! Field rules and the discriminated subscription branch

use serde::Deserialize;

use super::{
    is_valid_email, FieldIssue, FieldPath, FormData, FormInput, Hobby, SchemaError, Subscription,
    SubscriptionType, ValidationErrors,
};

/// Validate a candidate against the form schema
///
/// All rules run; every violation is collected in field order. On success the
/// result is normalized: a missing hobby list becomes empty and a missing
/// newsletter flag becomes `false`.
pub fn validate(input: &FormInput) -> Result<FormData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if input.name.trim().is_empty() {
        errors.push(FieldPath::Name, FieldIssue::NameRequired);
    }

    if !is_valid_email(&input.email) {
        errors.push(FieldPath::Email, FieldIssue::InvalidEmail);
    }

    let subscription = match SubscriptionType::from_tag(&input.subscription_type) {
        Some(SubscriptionType::Free) => Some(Subscription::Free),
        Some(SubscriptionType::Premium) => {
            let features = input.premium_features.as_deref().unwrap_or_default();
            if features.is_empty() {
                errors.push(FieldPath::PremiumFeatures, FieldIssue::PremiumFeaturesRequired);
                None
            } else {
                Some(Subscription::Premium {
                    premium_features: features.to_string(),
                })
            }
        }
        None => {
            errors.push(FieldPath::SubscriptionType, FieldIssue::SubscriptionTypeRequired);
            None
        }
    };

    let hobbies = input.hobbies.as_deref().unwrap_or_default();
    for (index, entry) in hobbies.iter().enumerate() {
        if entry.hobby.is_empty() {
            errors.push(FieldPath::Hobby(index), FieldIssue::HobbyRequired);
        }
    }

    match subscription {
        Some(subscription) if errors.is_empty() => Ok(FormData {
            name: input.name.clone(),
            email: input.email.clone(),
            subscription,
            hobbies: hobbies
                .iter()
                .map(|h| Hobby {
                    hobby: h.hobby.clone(),
                })
                .collect(),
            newsletter: input.newsletter.unwrap_or(false),
        }),
        _ => Err(errors),
    }
}

/// Decode a JSON candidate and validate it
#[allow(dead_code)] // Entry point for payloads that arrive as JSON rather than from the buffer
pub fn validate_json(value: &serde_json::Value) -> Result<FormData, SchemaError> {
    let input = FormInput::deserialize(value)?;
    Ok(validate(&input)?)
}
