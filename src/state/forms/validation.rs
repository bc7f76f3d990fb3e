//! Field validation rules

use super::field::FormField;
use regex::Regex;
use std::sync::LazyLock;

/// One `@`, no whitespace, at least one `.` after the `@`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Result of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub message: Option<String>,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Check a field against its rules. The first failing rule wins.
pub fn validate(field: &FormField) -> Validation {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return Validation::fail(format!("Please enter your {}", field.name));
    }

    if field.name == "email" && !value.is_empty() && !is_valid_email(value) {
        return Validation::fail(INVALID_EMAIL_MESSAGE);
    }

    Validation::ok()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
