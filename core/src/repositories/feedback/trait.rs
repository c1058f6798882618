//! Feedback repository trait.

use async_trait::async_trait;

use crate::domain::entities::feedback::Feedback;
use crate::errors::DomainError;

/// Repository contract for feedback persistence
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError>;

    /// List all feedback, newest first
    async fn list(&self) -> Result<Vec<Feedback>, DomainError>;
}
