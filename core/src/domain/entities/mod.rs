//! Domain entities

pub mod admin;
pub mod cart;
pub mod customer;
pub mod favorite;
pub mod feedback;
pub mod inventory;
pub mod store;

pub use admin::AdminProfile;
pub use cart::CartItem;
pub use customer::CustomerAccount;
pub use favorite::FavoritePlant;
pub use feedback::Feedback;
pub use inventory::InventoryItem;
pub use store::{StoreProfile, StoreUpdate};
