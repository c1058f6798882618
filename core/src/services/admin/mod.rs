//! Back-office admin profiles.

mod service;

pub use service::{AdminService, NewAdmin};
