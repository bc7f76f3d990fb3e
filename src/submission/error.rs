//! Submission error types

use thiserror::Error;

/// Why a contact form submission did not go through
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The endpoint answered and refused the submission
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The submission task ended without an answer (panic or cancellation)
    #[error("submission aborted: {0}")]
    Aborted(String),
}
