//! Contact form state and submission bookkeeping

use super::field::FormField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Lifecycle of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Submit control: disabled with a loading label while submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitControl {
    pub disabled: bool,
    pub loading: bool,
}

impl SubmitControl {
    pub fn label(&self) -> &'static str {
        if self.loading {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

/// Values handed to the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The site's contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    pub state: SubmissionState,
    pub submit: SubmitControl,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", true),
            email: FormField::text("email", "Email", true),
            subject: FormField::text("subject", "Subject", false),
            message: FormField::multiline("message", "Message", true),
            active_field_index: 0,
            state: SubmissionState::Idle,
            submit: SubmitControl::default(),
        }
    }

    pub fn fields(&self) -> [&FormField; 4] {
        [&self.name, &self.email, &self.subject, &self.message]
    }

    fn fields_mut(&mut self) -> [&mut FormField; 4] {
        [
            &mut self.name,
            &mut self.email,
            &mut self.subject,
            &mut self.message,
        ]
    }

    /// Validate every field so that every error gets displayed
    pub fn validate_all(&mut self) -> bool {
        self.fields_mut()
            .into_iter()
            .fold(true, |valid, field| field.validate() && valid)
    }

    /// Blur the active field, then move focus forward
    pub fn focus_next(&mut self) {
        self.get_active_field_mut().blur();
        self.next_field();
    }

    /// Blur the active field, then move focus backward
    pub fn focus_prev(&mut self) {
        self.get_active_field_mut().blur();
        self.prev_field();
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Toggle the submit control between its loading and idle looks
    pub fn set_loading(&mut self, loading: bool) {
        self.submit = SubmitControl {
            disabled: loading,
            loading,
        };
    }

    /// Snapshot of the current values
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: self.name.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            subject: self.subject.value.trim().to_string(),
            message: self.message.value.trim().to_string(),
        }
    }

    /// Clear every value and error
    pub fn reset(&mut self) {
        for field in self.fields_mut() {
            field.clear();
            field.clear_error();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index;
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.subject,
            _ => &mut self.message,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields().get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.name.value = "Ada Lovelace".to_string();
        form.email.value = "ada@example.com".to_string();
        form.message.value = "Hello there".to_string();
        form
    }

    mod fields {
        use super::*;

        #[test]
        fn test_required_flags() {
            let form = ContactForm::new();
            assert!(form.name.required);
            assert!(form.email.required);
            assert!(!form.subject.required);
            assert!(form.message.required);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut form = ContactForm::new();
            form.set_active_field(3);
            form.next_field();
            assert_eq!(form.active_field(), 0);
        }

        #[test]
        fn test_prev_field_wraps() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert_eq!(form.active_field(), 3);
        }

        #[test]
        fn test_get_field_out_of_range() {
            let form = ContactForm::new();
            assert!(form.get_field(4).is_none());
            assert_eq!(form.get_field(1).map(|f| f.name.as_str()), Some("email"));
        }

        #[test]
        fn test_focus_next_validates_field_being_left() {
            let mut form = ContactForm::new();
            form.focus_next();
            assert!(form.name.has_error());
            assert_eq!(form.active_field(), 1);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_validate_all_reports_every_error() {
            let mut form = ContactForm::new();
            assert!(!form.validate_all());
            assert!(form.name.has_error());
            assert!(form.email.has_error());
            assert!(!form.subject.has_error());
            assert!(form.message.has_error());
        }

        #[test]
        fn test_validate_all_passes_filled_form() {
            let mut form = filled();
            assert!(form.validate_all());
        }

        #[test]
        fn test_bad_email_fails_whole_form() {
            let mut form = filled();
            form.email.value = "ada@example".to_string();
            assert!(!form.validate_all());
            assert!(!form.name.has_error());
            assert!(form.email.has_error());
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn test_to_submission_trims_values() {
            let mut form = filled();
            form.name.value = "  Ada  ".to_string();
            let submission = form.to_submission();
            assert_eq!(submission.name, "Ada");
            assert_eq!(submission.email, "ada@example.com");
            assert_eq!(submission.subject, "");
        }

        #[test]
        fn test_submissions_get_distinct_ids() {
            let form = filled();
            assert_ne!(form.to_submission().id, form.to_submission().id);
        }

        #[test]
        fn test_reset_clears_values_and_errors() {
            let mut form = filled();
            form.subject.error = Some("stale".to_string());
            form.set_active_field(2);
            form.reset();
            assert!(form.fields().iter().all(|f| f.value.is_empty()));
            assert!(form.fields().iter().all(|f| !f.has_error()));
            assert_eq!(form.active_field(), 0);
        }

        #[test]
        fn test_set_loading_swaps_label() {
            let mut form = ContactForm::new();
            form.set_loading(true);
            assert!(form.submit.disabled);
            assert_eq!(form.submit.label(), "Sending...");
            form.set_loading(false);
            assert!(!form.submit.disabled);
            assert_eq!(form.submit.label(), "Send Message");
        }

        #[test]
        fn test_submission_serializes() {
            let submission = filled().to_submission();
            let json = serde_json::to_string(&submission).unwrap();
            let parsed: ContactSubmission = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, submission);
        }
    }
}
