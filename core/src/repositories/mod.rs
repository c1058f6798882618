//! Repository interfaces and in-memory mock implementations.
//!
//! Each sub-module defines an async trait for one aggregate plus a mock
//! backed by a `tokio::sync::RwLock`ed map, used by service unit tests and
//! the API integration tests.

pub mod admin;
pub mod cart;
pub mod customer;
pub mod favorite;
pub mod feedback;
pub mod inventory;
pub mod store;

pub use admin::{AdminRepository, MockAdminRepository};
pub use cart::{CartRepository, MockCartRepository};
pub use customer::{CustomerRepository, MockCustomerRepository};
pub use favorite::{FavoriteRepository, MockFavoriteRepository};
pub use feedback::{FeedbackRepository, MockFeedbackRepository};
pub use inventory::{InventoryRepository, MockInventoryRepository};
pub use store::{MockStoreRepository, StoreRepository};
