//! MySQL implementation of the FeedbackRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::feedback::Feedback;
use pl_core::errors::DomainError;
use pl_core::repositories::FeedbackRepository;

use super::db_error;

/// MySQL implementation of FeedbackRepository
pub struct MySqlFeedbackRepository {
    pool: MySqlPool,
}

impl MySqlFeedbackRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_feedback(row: &sqlx::mysql::MySqlRow) -> Result<Feedback, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;

        Ok(Feedback {
            id: Uuid::parse_str(&id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to get name", e))?,
            message: row
                .try_get("message")
                .map_err(|e| db_error("Failed to get message", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }
}

#[async_trait]
impl FeedbackRepository for MySqlFeedbackRepository {
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError> {
        let query = "INSERT INTO feedback (id, name, message, created_at) VALUES (?, ?, ?, ?)";

        sqlx::query(query)
            .bind(feedback.id.to_string())
            .bind(&feedback.name)
            .bind(&feedback.message)
            .bind(feedback.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to insert feedback", e))?;

        Ok(feedback)
    }

    async fn list(&self) -> Result<Vec<Feedback>, DomainError> {
        let query = "SELECT id, name, message, created_at FROM feedback ORDER BY created_at DESC";

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Feedback listing failed", e))?;

        rows.iter().map(Self::row_to_feedback).collect()
    }
}
