//! Request and response DTOs.

pub mod admin;
pub mod customer;
pub mod feedback;
pub mod shopping;
pub mod store;
