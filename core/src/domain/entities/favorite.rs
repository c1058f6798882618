//! Favorite plant entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A plant a customer has favorited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePlant {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub inventory_item_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FavoritePlant {
    pub fn new(customer_id: Uuid, inventory_item_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            inventory_item_id,
            created_at: Utc::now(),
        }
    }
}
