//! # Infrastructure Layer
//!
//! Concrete implementations behind the core's repository and service traits:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Security**: salted SHA-256 hashing for passwords and codes
//! - **Mail**: verification code delivery (log-backed by default)

pub mod database;
pub mod mail;
pub mod security;

pub use database::connection::DatabasePool;
pub use mail::LogMailService;
pub use security::Sha256SecretHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
