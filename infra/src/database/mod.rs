//! Database access: connection pooling and MySQL repositories.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
