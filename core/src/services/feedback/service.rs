//! Feedback submission and listing

use std::sync::Arc;

use pl_shared::utils::validation::validators;

use crate::domain::entities::feedback::{Feedback, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH};
use crate::errors::DomainError;
use crate::repositories::FeedbackRepository;

/// Public feedback form handling
pub struct FeedbackService<F>
where
    F: FeedbackRepository,
{
    feedback: Arc<F>,
}

impl<F> FeedbackService<F>
where
    F: FeedbackRepository,
{
    pub fn new(feedback: Arc<F>) -> Self {
        Self { feedback }
    }

    /// Accept a feedback entry after bounding both fields.
    pub async fn submit(&self, name: &str, message: &str) -> Result<Feedback, DomainError> {
        let name = name.trim();
        let message = message.trim();

        if !validators::length_between(name, 1, MAX_NAME_LENGTH) {
            return Err(DomainError::validation(
                "Name must be between 1 and 100 characters",
            ));
        }
        if !validators::length_between(message, 1, MAX_MESSAGE_LENGTH) {
            return Err(DomainError::validation(
                "Message must be between 1 and 500 characters",
            ));
        }

        let entry = self
            .feedback
            .create(Feedback::new(name.to_string(), message.to_string()))
            .await?;

        tracing::info!(feedback_id = %entry.id, event = "feedback_received", "Feedback received");
        Ok(entry)
    }

    /// All feedback, newest first.
    pub async fn list(&self) -> Result<Vec<Feedback>, DomainError> {
        self.feedback.list().await
    }
}
