//! Shopping cart line entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line in a customer's cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub inventory_item_id: Uuid,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(customer_id: Uuid, inventory_item_id: Uuid, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            inventory_item_id,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Adding the same plant again grows the existing line.
    pub fn add_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_quantity_accumulates() {
        let mut item = CartItem::new(Uuid::new_v4(), Uuid::new_v4(), 1);
        item.add_quantity(2);
        assert_eq!(item.quantity, 3);
    }
}
