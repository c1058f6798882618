//! In-memory implementation of FeedbackRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::feedback::Feedback;
use crate::errors::DomainError;

use super::trait_::FeedbackRepository;

/// Mock feedback repository backed by a vec
#[derive(Default)]
pub struct MockFeedbackRepository {
    entries: Arc<RwLock<Vec<Feedback>>>,
}

impl MockFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for MockFeedbackRepository {
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError> {
        let mut entries = self.entries.write().await;
        entries.push(feedback.clone());
        Ok(feedback)
    }

    async fn list(&self) -> Result<Vec<Feedback>, DomainError> {
        let entries = self.entries.read().await;
        let mut all = entries.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
