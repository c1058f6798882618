//! Customer-side shopping: cart lines and favorites.

mod service;

pub use service::ShoppingService;
