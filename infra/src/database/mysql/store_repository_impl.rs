//! MySQL implementation of the StoreRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::store::StoreProfile;
use pl_core::errors::DomainError;
use pl_core::repositories::StoreRepository;

use super::{db_error, map_insert_error};

/// MySQL implementation of StoreRepository
pub struct MySqlStoreRepository {
    pool: MySqlPool,
}

impl MySqlStoreRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_store(row: &sqlx::mysql::MySqlRow) -> Result<StoreProfile, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;

        Ok(StoreProfile {
            id: Uuid::parse_str(&id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to get name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            phone: row
                .try_get("phone")
                .map_err(|e| db_error("Failed to get phone", e))?,
            bio: row
                .try_get("bio")
                .map_err(|e| db_error("Failed to get bio", e))?,
            address: row
                .try_get("address")
                .map_err(|e| db_error("Failed to get address", e))?,
            banner_image: row
                .try_get("banner_image")
                .map_err(|e| db_error("Failed to get banner_image", e))?,
            dashboard_message: row
                .try_get("dashboard_message")
                .map_err(|e| db_error("Failed to get dashboard_message", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("Failed to get updated_at", e))?,
        })
    }
}

const COLUMNS: &str = r#"id, name, email, phone, bio, address, banner_image,
       dashboard_message, created_at, updated_at"#;

#[async_trait]
impl StoreRepository for MySqlStoreRepository {
    async fn create(&self, store: StoreProfile) -> Result<StoreProfile, DomainError> {
        let query = r#"
            INSERT INTO stores (
                id, name, email, phone, bio, address, banner_image,
                dashboard_message, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(store.id.to_string())
            .bind(&store.name)
            .bind(&store.email)
            .bind(&store.phone)
            .bind(&store.bio)
            .bind(&store.address)
            .bind(&store.banner_image)
            .bind(&store.dashboard_message)
            .bind(store.created_at)
            .bind(store.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error("store email", e))?;

        Ok(store)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoreProfile>, DomainError> {
        let query = format!("SELECT {} FROM stores WHERE id = ? LIMIT 1", COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Store lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_store(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoreProfile>, DomainError> {
        let query = format!("SELECT {} FROM stores WHERE email = ? LIMIT 1", COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Store lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_store(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<StoreProfile>, DomainError> {
        let query = format!("SELECT {} FROM stores ORDER BY created_at ASC", COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Store listing failed", e))?;

        rows.iter().map(Self::row_to_store).collect()
    }

    async fn update(&self, store: StoreProfile) -> Result<StoreProfile, DomainError> {
        let query = r#"
            UPDATE stores SET
                name = ?,
                phone = ?,
                bio = ?,
                address = ?,
                banner_image = ?,
                dashboard_message = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&store.name)
            .bind(&store.phone)
            .bind(&store.bio)
            .bind(&store.address)
            .bind(&store.banner_image)
            .bind(&store.dashboard_message)
            .bind(store.updated_at)
            .bind(store.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update store", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("store"));
        }

        Ok(store)
    }
}
