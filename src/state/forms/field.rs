//! Form field value objects

use super::validation::{validate, Validation};

/// A single contact form field with its value and error display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub is_multiline: bool,
    /// Message shown next to the field, set by validation
    pub error: Option<String>,
}

impl FormField {
    /// Create a new single-line field
    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            required,
            is_multiline: false,
            error: None,
        }
    }

    /// Create a new multi-line field
    pub fn multiline(name: &str, label: &str, required: bool) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label, required)
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Run validation and update the error display. Returns whether the field
    /// is valid.
    pub fn validate(&mut self) -> bool {
        let Validation { valid, message } = validate(self);
        self.error = message;
        valid
    }

    /// Focus left the field
    pub fn blur(&mut self) -> bool {
        self.validate()
    }

    /// Hide the error display without re-validating
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.clear_error();
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.clear_error();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}
