//! MySQL implementation of the AdminRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::admin::AdminProfile;
use pl_core::errors::DomainError;
use pl_core::repositories::AdminRepository;

use super::{db_error, map_insert_error};

/// MySQL implementation of AdminRepository
pub struct MySqlAdminRepository {
    pool: MySqlPool,
}

impl MySqlAdminRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_admin(row: &sqlx::mysql::MySqlRow) -> Result<AdminProfile, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;

        Ok(AdminProfile {
            id: Uuid::parse_str(&id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            display_name: row
                .try_get("display_name")
                .map_err(|e| db_error("Failed to get display_name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            preferred_view: row
                .try_get("preferred_view")
                .map_err(|e| db_error("Failed to get preferred_view", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("Failed to get updated_at", e))?,
        })
    }
}

const COLUMNS: &str = "id, display_name, email, preferred_view, created_at, updated_at";

#[async_trait]
impl AdminRepository for MySqlAdminRepository {
    async fn create(&self, admin: AdminProfile) -> Result<AdminProfile, DomainError> {
        let query = r#"
            INSERT INTO admins (id, display_name, email, preferred_view, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(admin.id.to_string())
            .bind(&admin.display_name)
            .bind(&admin.email)
            .bind(&admin.preferred_view)
            .bind(admin.created_at)
            .bind(admin.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error("admin email", e))?;

        Ok(admin)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminProfile>, DomainError> {
        let query = format!("SELECT {} FROM admins WHERE id = ? LIMIT 1", COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Admin lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_admin(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminProfile>, DomainError> {
        let query = format!("SELECT {} FROM admins WHERE email = ? LIMIT 1", COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Admin lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_admin(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<AdminProfile>, DomainError> {
        let query = format!("SELECT {} FROM admins ORDER BY created_at ASC", COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Admin listing failed", e))?;

        rows.iter().map(Self::row_to_admin).collect()
    }

    async fn update(&self, admin: AdminProfile) -> Result<AdminProfile, DomainError> {
        let query = r#"
            UPDATE admins SET
                display_name = ?,
                preferred_view = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&admin.display_name)
            .bind(&admin.preferred_view)
            .bind(admin.updated_at)
            .bind(admin.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update admin", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("admin"));
        }

        Ok(admin)
    }
}
