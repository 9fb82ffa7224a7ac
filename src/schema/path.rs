//! Field paths: dotted/indexed addresses of form fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SchemaError;

/// Address of a single field in the form data
///
/// Textual form: `name`, `email`, `subscriptionType`, `premiumFeatures`,
/// `newsletter`, `hobbies.<index>.hobby`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldPath {
    Name,
    Email,
    SubscriptionType,
    PremiumFeatures,
    Hobby(usize),
    Newsletter,
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => f.write_str("name"),
            FieldPath::Email => f.write_str("email"),
            FieldPath::SubscriptionType => f.write_str("subscriptionType"),
            FieldPath::PremiumFeatures => f.write_str("premiumFeatures"),
            FieldPath::Hobby(index) => write!(f, "hobbies.{index}.hobby"),
            FieldPath::Newsletter => f.write_str("newsletter"),
        }
    }
}

impl FromStr for FieldPath {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => return Ok(FieldPath::Name),
            "email" => return Ok(FieldPath::Email),
            "subscriptionType" => return Ok(FieldPath::SubscriptionType),
            "premiumFeatures" => return Ok(FieldPath::PremiumFeatures),
            "newsletter" => return Ok(FieldPath::Newsletter),
            _ => {}
        }

        let mut segments = s.split('.');
        match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some("hobbies"), Some(index), Some("hobby"), None) => index
                .parse::<usize>()
                .map(FieldPath::Hobby)
                .map_err(|_| SchemaError::UnknownPath(s.to_string())),
            _ => Err(SchemaError::UnknownPath(s.to_string())),
        }
    }
}

impl TryFrom<String> for FieldPath {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalar_paths() {
        assert_eq!(FieldPath::Name.to_string(), "name");
        assert_eq!(FieldPath::SubscriptionType.to_string(), "subscriptionType");
        assert_eq!(FieldPath::PremiumFeatures.to_string(), "premiumFeatures");
    }

    #[test]
    fn test_display_hobby_path() {
        assert_eq!(FieldPath::Hobby(3).to_string(), "hobbies.3.hobby");
    }

    #[test]
    fn test_parse_every_path() {
        for path in [
            FieldPath::Name,
            FieldPath::Email,
            FieldPath::SubscriptionType,
            FieldPath::PremiumFeatures,
            FieldPath::Hobby(0),
            FieldPath::Hobby(12),
            FieldPath::Newsletter,
        ] {
            assert_eq!(path.to_string().parse::<FieldPath>().unwrap(), path);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert!("nickname".parse::<FieldPath>().is_err());
        assert!("hobbies.x.hobby".parse::<FieldPath>().is_err());
        assert!("hobbies.0".parse::<FieldPath>().is_err());
        assert!("hobbies.0.hobby.extra".parse::<FieldPath>().is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&FieldPath::Hobby(1)).unwrap();
        assert_eq!(json, "\"hobbies.1.hobby\"");
    }

    #[test]
    fn test_hobby_paths_sort_after_scalars_before_newsletter() {
        let mut paths = vec![
            FieldPath::Newsletter,
            FieldPath::Hobby(1),
            FieldPath::Name,
            FieldPath::Hobby(0),
        ];
        paths.sort();
        assert_eq!(
            paths,
            vec![
                FieldPath::Name,
                FieldPath::Hobby(0),
                FieldPath::Hobby(1),
                FieldPath::Newsletter
            ]
        );
    }
}
