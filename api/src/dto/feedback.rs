//! DTOs for the public feedback form.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/feedback
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct FeedbackRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "Message must be 1-500 characters"))]
    pub message: String,
}
