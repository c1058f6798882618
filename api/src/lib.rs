//! # Plantera API
//!
//! HTTP layer for the Plantera backend: route handlers, DTOs, middleware,
//! and the application factory. Business rules live in `pl_core`; this
//! crate translates between HTTP and the domain services.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
