//! Configuration module
//!
//! Configuration is organized by concern:
//! - `database` - connection pool settings
//! - `environment` - environment detection
//! - `server` - HTTP server bind settings
//! - `verification` - customer verification lifecycle settings

pub mod database;
pub mod environment;
pub mod server;
pub mod verification;

pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
pub use verification::VerificationSettings;
