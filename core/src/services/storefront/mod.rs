//! Store profiles and the inventory they list.

mod service;

pub use service::{NewInventoryItem, NewStore, StoreService};
