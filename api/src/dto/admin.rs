//! DTOs for admin profile management.

use serde::{Deserialize, Serialize};
use validator::Validate;

use pl_core::services::admin::NewAdmin;

/// Request body for POST /api/v1/admins
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(length(min = 1, max = 100, message = "Display name must be 1-100 characters"))]
    pub display_name: String,

    #[validate(email(message = "Invalid admin email address"))]
    pub email: String,

    pub preferred_view: Option<String>,
}

impl From<CreateAdminRequest> for NewAdmin {
    fn from(req: CreateAdminRequest) -> Self {
        Self {
            display_name: req.display_name,
            email: req.email,
            preferred_view: req.preferred_view,
        }
    }
}

/// Request body for PATCH /api/v1/admins/{id}/view
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct UpdateAdminViewRequest {
    #[validate(length(min = 1, message = "Preferred view must not be empty"))]
    pub preferred_view: String,
}
