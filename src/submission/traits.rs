//! Trait abstraction for the submission endpoint to enable mocking in tests

use super::error::SubmissionError;
use crate::state::ContactSubmission;
use async_trait::async_trait;

/// Endpoint accepting contact form submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClientTrait: Send + Sync {
    /// Deliver a submission. Resolves on success, errors on failure.
    async fn submit(&self, submission: ContactSubmission) -> Result<(), SubmissionError>;
}
