//! Input and result types for the verification lifecycle

use crate::domain::value_objects::customer_view::CustomerPublic;

/// Registration input as received from the API layer
#[derive(Debug, Clone)]
pub struct RegisterCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Plaintext password; hashed before anything is stored
    pub password: String,
}

/// Result of a successful `verify` call
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    /// Public view of the now-verified account
    pub customer: CustomerPublic,
    /// True when the account was already verified and the call was a no-op
    pub already_verified: bool,
}

/// Result of `register` and `resend`
#[derive(Debug, Clone)]
pub struct RegistrationResult {
    /// Public view of the account
    pub customer: CustomerPublic,
    /// True until the account is verified
    pub verification_required: bool,
    /// Plaintext code preview, present only when the deployment-level
    /// visibility switch is enabled
    pub code_preview: Option<String>,
    /// True when an existing pending account was overwritten (or a code
    /// was re-issued) rather than a fresh account created
    pub renewed: bool,
    /// Human-readable summary for display, distinguishing a fresh
    /// registration from a renewed code
    pub message: String,
}
