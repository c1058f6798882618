//! DTOs for customer registration and verification.

use serde::{Deserialize, Serialize};
use validator::Validate;

use pl_core::domain::value_objects::customer_view::CustomerPublic;
use pl_core::services::verification::{RegistrationResult, VerificationOutcome};

/// Request body for POST /api/v1/customers/register
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Request body for POST /api/v1/customers/verify
///
/// The code is not shape-checked here; any code that does not hash to the
/// stored value is a mismatch, wrong length included.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct VerifyRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub code: String,
}

/// Request body for POST /api/v1/customers/resend-code
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ResendRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Response body for register and resend-code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub customer: CustomerPublic,
    pub verification_required: bool,
    /// Plaintext code preview; present only when the deployment enables it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_preview: Option<String>,
    pub renewed: bool,
    /// Human-readable summary for display
    pub message: String,
}

impl From<RegistrationResult> for RegistrationResponse {
    fn from(result: RegistrationResult) -> Self {
        Self {
            customer: result.customer,
            verification_required: result.verification_required,
            code_preview: result.code_preview,
            renewed: result.renewed,
            message: result.message,
        }
    }
}

/// Response body for verify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub customer: CustomerPublic,
    pub already_verified: bool,
}

impl From<VerificationOutcome> for VerifyResponse {
    fn from(outcome: VerificationOutcome) -> Self {
        Self {
            customer: outcome.customer,
            already_verified: outcome.already_verified,
        }
    }
}
