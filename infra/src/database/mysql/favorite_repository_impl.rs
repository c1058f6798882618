//! MySQL implementation of the FavoriteRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::favorite::FavoritePlant;
use pl_core::errors::DomainError;
use pl_core::repositories::FavoriteRepository;

use super::db_error;

/// MySQL implementation of FavoriteRepository
pub struct MySqlFavoriteRepository {
    pool: MySqlPool,
}

impl MySqlFavoriteRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_favorite(row: &sqlx::mysql::MySqlRow) -> Result<FavoritePlant, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;
        let customer_id: String = row
            .try_get("customer_id")
            .map_err(|e| db_error("Failed to get customer_id", e))?;
        let inventory_item_id: String = row
            .try_get("inventory_item_id")
            .map_err(|e| db_error("Failed to get inventory_item_id", e))?;

        Ok(FavoritePlant {
            id: Uuid::parse_str(&id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            customer_id: Uuid::parse_str(&customer_id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            inventory_item_id: Uuid::parse_str(&inventory_item_id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
        })
    }
}

const COLUMNS: &str = "id, customer_id, inventory_item_id, created_at";

#[async_trait]
impl FavoriteRepository for MySqlFavoriteRepository {
    async fn create(&self, favorite: FavoritePlant) -> Result<FavoritePlant, DomainError> {
        let query = r#"
            INSERT INTO favorites (id, customer_id, inventory_item_id, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(favorite.id.to_string())
            .bind(favorite.customer_id.to_string())
            .bind(favorite.inventory_item_id.to_string())
            .bind(favorite.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to insert favorite", e))?;

        Ok(favorite)
    }

    async fn find_pair(
        &self,
        customer_id: Uuid,
        inventory_item_id: Uuid,
    ) -> Result<Option<FavoritePlant>, DomainError> {
        let query = format!(
            "SELECT {} FROM favorites WHERE customer_id = ? AND inventory_item_id = ? LIMIT 1",
            COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(customer_id.to_string())
            .bind(inventory_item_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Favorite lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_favorite(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<FavoritePlant>, DomainError> {
        let query = format!(
            "SELECT {} FROM favorites WHERE customer_id = ? ORDER BY created_at ASC",
            COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(customer_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Favorites listing failed", e))?;

        rows.iter().map(Self::row_to_favorite).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete favorite", e))?;

        Ok(result.rows_affected() > 0)
    }
}
