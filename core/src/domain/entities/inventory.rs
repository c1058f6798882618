//! Inventory item entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A plant listed for sale by a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub store_id: Uuid,
    pub plant_name: String,
    pub description: Option<String>,
    /// Unit price; validated strictly positive at creation
    pub price: f64,
    pub stock: u32,
    pub image_url: Option<String>,
    /// Free-form comma-separated tags
    pub tags: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store_id: Uuid,
        plant_name: String,
        description: Option<String>,
        price: f64,
        stock: u32,
        image_url: Option<String>,
        tags: Option<String>,
        is_featured: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            store_id,
            plant_name,
            description,
            price,
            stock,
            image_url,
            tags,
            is_featured,
            created_at: now,
            updated_at: now,
        }
    }
}
