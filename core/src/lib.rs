//! # Plantera Core
//!
//! Core business logic and domain layer for the Plantera backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types. It performs no I/O of its own; persistence
//! and delivery are injected through the repository and service traits.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
