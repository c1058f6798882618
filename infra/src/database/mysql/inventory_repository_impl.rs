//! MySQL implementation of the InventoryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::inventory::InventoryItem;
use pl_core::errors::DomainError;
use pl_core::repositories::InventoryRepository;

use super::db_error;

/// MySQL implementation of InventoryRepository
pub struct MySqlInventoryRepository {
    pool: MySqlPool,
}

impl MySqlInventoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_item(row: &sqlx::mysql::MySqlRow) -> Result<InventoryItem, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let store_id: String = row
            .try_get("store_id")
            .map_err(|e| db_error("Failed to get store_id", e))?;

        Ok(InventoryItem {
            id: Uuid::parse_str(&id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            store_id: Uuid::parse_str(&store_id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            plant_name: row
                .try_get("plant_name")
                .map_err(|e| db_error("Failed to get plant_name", e))?,
            description: row
                .try_get("description")
                .map_err(|e| db_error("Failed to get description", e))?,
            price: row
                .try_get("price")
                .map_err(|e| db_error("Failed to get price", e))?,
            stock: row
                .try_get("stock")
                .map_err(|e| db_error("Failed to get stock", e))?,
            image_url: row
                .try_get("image_url")
                .map_err(|e| db_error("Failed to get image_url", e))?,
            tags: row
                .try_get("tags")
                .map_err(|e| db_error("Failed to get tags", e))?,
            is_featured: row
                .try_get("is_featured")
                .map_err(|e| db_error("Failed to get is_featured", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("Failed to get updated_at", e))?,
        })
    }
}

const COLUMNS: &str = r#"id, store_id, plant_name, description, price, stock,
       image_url, tags, is_featured, created_at, updated_at"#;

#[async_trait]
impl InventoryRepository for MySqlInventoryRepository {
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, DomainError> {
        let query = r#"
            INSERT INTO inventory_items (
                id, store_id, plant_name, description, price, stock,
                image_url, tags, is_featured, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(item.id.to_string())
            .bind(item.store_id.to_string())
            .bind(&item.plant_name)
            .bind(&item.description)
            .bind(item.price)
            .bind(item.stock)
            .bind(&item.image_url)
            .bind(&item.tags)
            .bind(item.is_featured)
            .bind(item.created_at)
            .bind(item.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to insert inventory item", e))?;

        Ok(item)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<InventoryItem>, DomainError> {
        let query = format!(
            "SELECT {} FROM inventory_items WHERE id = ? LIMIT 1",
            COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Inventory lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_item(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<InventoryItem>, DomainError> {
        let query = format!(
            "SELECT {} FROM inventory_items WHERE store_id = ? ORDER BY created_at ASC",
            COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(store_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Inventory listing failed", e))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn list_featured(&self) -> Result<Vec<InventoryItem>, DomainError> {
        let query = format!(
            "SELECT {} FROM inventory_items WHERE is_featured = TRUE ORDER BY created_at ASC",
            COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Featured listing failed", e))?;

        rows.iter().map(Self::row_to_item).collect()
    }
}
