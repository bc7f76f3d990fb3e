//! Submission collaborator for the contact form

mod client;
mod error;
mod traits;

pub use client::{SimulatedSubmitter, DEFAULT_SUBMISSION_DELAY};
pub use error::SubmissionError;
pub use traits::SubmissionClientTrait;

#[cfg(test)]
pub use traits::MockSubmissionClientTrait;
