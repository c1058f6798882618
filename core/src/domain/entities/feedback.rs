//! Feedback form entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum accepted length for the sender name
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum accepted length for the message body
pub const MAX_MESSAGE_LENGTH: usize = 500;

/// An entry submitted through the public feedback form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(name: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            message,
            created_at: Utc::now(),
        }
    }
}
