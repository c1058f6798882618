//! Shared utilities and common types for the Plantera server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types (server, database, verification)
//! - API response wrappers
//! - Validation utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, Environment, ServerConfig, VerificationSettings};
pub use types::{ApiResponse, ErrorBody};
pub use utils::validation;
