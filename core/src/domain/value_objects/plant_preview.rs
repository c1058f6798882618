//! Joined read shapes for cart and favorites listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::inventory::InventoryItem;

/// Compact plant summary embedded in cart and favorites responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantPreview {
    pub id: Uuid,
    pub store_id: Uuid,
    /// Resolved from the owning store; absent if the store row is gone
    pub store_name: Option<String>,
    pub title: String,
    pub price: f64,
    pub image_url: Option<String>,
}

impl PlantPreview {
    pub fn from_item(item: &InventoryItem, store_name: Option<String>) -> Self {
        Self {
            id: item.id,
            store_id: item.store_id,
            store_name,
            title: item.plant_name.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
        }
    }
}

/// Cart line with its plant preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemRead {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
    pub plant: PlantPreview,
}

/// Favorite with its plant preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritePlantRead {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub plant: PlantPreview,
}
