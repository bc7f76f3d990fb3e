//! Contact form domain layer

mod contact_form;
mod field;
mod validation;

pub use contact_form::{ContactForm, ContactSubmission, Form, SubmissionState};
pub use field::FormField;
