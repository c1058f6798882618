//! Shared HTTP response handling.

pub mod error;

pub use error::{domain_error_response, validation_error_response};
