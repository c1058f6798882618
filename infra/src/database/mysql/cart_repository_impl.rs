//! MySQL implementation of the CartRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::cart::CartItem;
use pl_core::errors::DomainError;
use pl_core::repositories::CartRepository;

use super::db_error;

/// MySQL implementation of CartRepository
pub struct MySqlCartRepository {
    pool: MySqlPool,
}

impl MySqlCartRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_line(row: &sqlx::mysql::MySqlRow) -> Result<CartItem, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let customer_id: String = row
            .try_get("customer_id")
            .map_err(|e| db_error("Failed to get customer_id", e))?;
        let inventory_item_id: String = row
            .try_get("inventory_item_id")
            .map_err(|e| db_error("Failed to get inventory_item_id", e))?;

        Ok(CartItem {
            id: Uuid::parse_str(&id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            customer_id: Uuid::parse_str(&customer_id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            inventory_item_id: Uuid::parse_str(&inventory_item_id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            quantity: row
                .try_get("quantity")
                .map_err(|e| db_error("Failed to get quantity", e))?,
            added_at: row
                .try_get::<DateTime<Utc>, _>("added_at")
                .map_err(|e| db_error("Failed to get added_at", e))?,
        })
    }
}

const COLUMNS: &str = "id, customer_id, inventory_item_id, quantity, added_at";

#[async_trait]
impl CartRepository for MySqlCartRepository {
    async fn create(&self, item: CartItem) -> Result<CartItem, DomainError> {
        let query = r#"
            INSERT INTO cart_items (id, customer_id, inventory_item_id, quantity, added_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(item.id.to_string())
            .bind(item.customer_id.to_string())
            .bind(item.inventory_item_id.to_string())
            .bind(item.quantity)
            .bind(item.added_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to insert cart line", e))?;

        Ok(item)
    }

    async fn find_line(
        &self,
        customer_id: Uuid,
        inventory_item_id: Uuid,
    ) -> Result<Option<CartItem>, DomainError> {
        let query = format!(
            "SELECT {} FROM cart_items WHERE customer_id = ? AND inventory_item_id = ? LIMIT 1",
            COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(customer_id.to_string())
            .bind(inventory_item_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Cart line lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_line(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, item: CartItem) -> Result<CartItem, DomainError> {
        let query = "UPDATE cart_items SET quantity = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(item.quantity)
            .bind(item.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update cart line", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("cart item"));
        }

        Ok(item)
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<CartItem>, DomainError> {
        let query = format!(
            "SELECT {} FROM cart_items WHERE customer_id = ? ORDER BY added_at ASC",
            COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(customer_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Cart listing failed", e))?;

        rows.iter().map(Self::row_to_line).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete cart line", e))?;

        Ok(result.rows_affected() > 0)
    }
}
