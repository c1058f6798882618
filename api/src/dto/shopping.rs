//! DTOs for cart and favorites.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for POST /api/v1/customers/{id}/cart
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddCartRequest {
    pub inventory_item_id: Uuid,
    /// Defaults to a single plant when omitted
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Request body for POST /api/v1/customers/{id}/favorites
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddFavoriteRequest {
    pub inventory_item_id: Uuid,
}
