//! Form data shapes: the untyped candidate and the validated result

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two subscription choices offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionType {
    #[default]
    Free,
    Premium,
}

impl SubscriptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionType::Free => "free",
            SubscriptionType::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionType::Free => "Free",
            SubscriptionType::Premium => "Premium",
        }
    }

    /// The other choice
    pub fn toggle(&self) -> Self {
        match self {
            SubscriptionType::Free => SubscriptionType::Premium,
            SubscriptionType::Premium => SubscriptionType::Free,
        }
    }

    /// Parse the literal tag; anything other than `free`/`premium` is `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "free" => Some(SubscriptionType::Free),
            "premium" => Some(SubscriptionType::Premium),
            _ => None,
        }
    }
}

impl fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hobby entry as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HobbyInput {
    #[serde(default)]
    pub hobby: String,
}

/// Candidate form value handed to the validator
///
/// This is also the shape of the live preview. `subscription_type` stays a
/// plain string so that an unknown tag can be reported as a field error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subscription_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_features: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<Vec<HobbyInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<bool>,
}

impl Default for FormInput {
    /// The values the form starts with
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subscription_type: SubscriptionType::Free.as_str().to_string(),
            premium_features: None,
            hobbies: Some(Vec::new()),
            newsletter: Some(false),
        }
    }
}

/// Subscription branch of validated data
///
/// Premium features only exist on the premium variant, so they can never be
/// required of a free subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "subscriptionType", rename_all = "lowercase")]
pub enum Subscription {
    Free,
    Premium {
        #[serde(rename = "premiumFeatures")]
        premium_features: String,
    },
}

impl Subscription {
    pub fn kind(&self) -> SubscriptionType {
        match self {
            Subscription::Free => SubscriptionType::Free,
            Subscription::Premium { .. } => SubscriptionType::Premium,
        }
    }

    pub fn premium_features(&self) -> Option<&str> {
        match self {
            Subscription::Free => None,
            Subscription::Premium { premium_features } => Some(premium_features),
        }
    }
}

/// A validated hobby entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hobby {
    pub hobby: String,
}

/// Validated, typed form data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub subscription: Subscription,
    pub hobbies: Vec<Hobby>,
    pub newsletter: bool,
}
