//! Email syntax check

use regex::Regex;
use std::sync::LazyLock;

// Local part may not end with `.` or `'`; the domain needs at least one dot and
// an alphabetic TLD of two or more letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Returns true if `value` has standard email syntax
pub fn is_valid_email(value: &str) -> bool {
    // The regex crate has no lookahead, so the leading-dot and double-dot
    // rules are checked directly.
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        for email in [
            "ada@example.com",
            "first.last@example.co.uk",
            "user+tag@sub.domain.org",
            "o'brien@example.ie",
            "UPPER@EXAMPLE.COM",
            "a_b-c@x-y.io",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_rejects_missing_at_or_domain() {
        for email in [
            "",
            "bad",
            "ada.example.com",
            "ada@",
            "@example.com",
            "ada@example",
            "ada@.com",
            "ada@example.c",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_rejects_dot_placement() {
        assert!(!is_valid_email(".ada@example.com"));
        assert!(!is_valid_email("ada.@example.com"));
        assert!(!is_valid_email("a..da@example.com"));
        assert!(!is_valid_email("ada@example..com"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_email(" ada@example.com"));
        assert!(!is_valid_email("ada @example.com"));
        assert!(!is_valid_email("ada@example.com "));
    }
}
