//! Verification lifecycle error taxonomy.
//!
//! These are client-input errors surfaced directly to the caller with a
//! distinguishing code and message; none are retried internally.

use thiserror::Error;

/// Errors raised by the customer verification lifecycle
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Email is already registered to a verified account")]
    DuplicateEmail,

    #[error("Account is already verified")]
    AlreadyVerified,

    #[error("Account has no pending verification")]
    NoPendingVerification,

    #[error("Verification code has expired")]
    CodeExpired,

    #[error("Verification code does not match")]
    CodeMismatch,
}

impl VerificationError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            VerificationError::DuplicateEmail => "DUPLICATE_EMAIL",
            VerificationError::AlreadyVerified => "ALREADY_VERIFIED",
            VerificationError::NoPendingVerification => "NO_PENDING_VERIFICATION",
            VerificationError::CodeExpired => "CODE_EXPIRED",
            VerificationError::CodeMismatch => "CODE_MISMATCH",
        }
    }
}
