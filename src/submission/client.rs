//! Simulated submission endpoint
//!
//! Stands in for a real backend: waits a fixed delay, then resolves, or
//! rejects when configured to simulate an outage. A real endpoint replaces
//! this type behind [`SubmissionClientTrait`] and keeps the same success and
//! failure split.

use super::error::SubmissionError;
use super::traits::SubmissionClientTrait;
use crate::state::ContactSubmission;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated network delay
pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_millis(2000);

/// Fixed-delay stand-in for the submission backend
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration, fail: bool) -> Self {
        Self { delay, fail }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMISSION_DELAY, false)
    }
}

#[async_trait]
impl SubmissionClientTrait for SimulatedSubmitter {
    async fn submit(&self, submission: ContactSubmission) -> Result<(), SubmissionError> {
        tracing::debug!(
            "Simulating delivery of submission {} ({} bytes of message)",
            submission.id,
            submission.message.len()
        );
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(SubmissionError::Rejected(
                "simulated endpoint failure".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactForm;
    use tokio::time::Instant;

    fn submission() -> ContactSubmission {
        let mut form = ContactForm::new();
        form.name.value = "Ada".to_string();
        form.email.value = "ada@example.com".to_string();
        form.message.value = "Hi".to_string();
        form.to_submission()
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolves_after_delay() {
        let submitter = SimulatedSubmitter::default();
        let start = Instant::now();

        let result = submitter.submit(submission()).await;

        assert!(result.is_ok());
        assert!(start.elapsed() >= DEFAULT_SUBMISSION_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_when_failing() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(10), true);
        let result = submitter.submit(submission()).await;
        assert!(matches!(result, Err(SubmissionError::Rejected(_))));
    }

    #[test]
    fn test_zero_delay_resolves() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO, false);
        tokio_test::assert_ok!(tokio_test::block_on(submitter.submit(submission())));
    }

    #[test]
    fn test_default_delay_is_two_seconds() {
        assert_eq!(DEFAULT_SUBMISSION_DELAY, Duration::from_secs(2));
    }
}
