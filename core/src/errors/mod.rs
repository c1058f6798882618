//! Domain-specific error types and error handling.

mod types;

pub use types::VerificationError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Uniqueness violation reported by the store (e.g. duplicate email).
    /// The verification service translates this into a taxonomy error
    /// before it reaches a caller.
    #[error("Conflict on {resource}")]
    Conflict { resource: String },

    /// Storage-layer fault. Surfaced to callers as an opaque internal
    /// failure; the detail stays in the logs.
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to the verification taxonomy
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
