//! Read-side value objects returned to API callers

pub mod customer_view;
pub mod plant_preview;

pub use customer_view::CustomerPublic;
pub use plant_preview::{CartItemRead, FavoritePlantRead, PlantPreview};
