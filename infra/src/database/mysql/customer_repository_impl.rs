//! MySQL implementation of the CustomerRepository trait.
//!
//! The `customers` table carries a unique index on `email`; the insert path
//! surfaces violations of it as [`DomainError::Conflict`], which is what the
//! verification service relies on to reject concurrent duplicate
//! registrations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::customer::CustomerAccount;
use pl_core::errors::DomainError;
use pl_core::repositories::CustomerRepository;

use super::{db_error, map_insert_error};

/// MySQL implementation of CustomerRepository
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<CustomerAccount, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("Failed to get id", e))?;

        Ok(CustomerAccount {
            id: Uuid::parse_str(&id)
                .map_err(|e| db_error("Invalid UUID", sqlx::Error::Decode(Box::new(e))))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| db_error("Failed to get first_name", e))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| db_error("Failed to get last_name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to get email", e))?,
            phone: row
                .try_get("phone")
                .map_err(|e| db_error("Failed to get phone", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| db_error("Failed to get password_hash", e))?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| db_error("Failed to get is_verified", e))?,
            verification_code_hash: row
                .try_get("verification_code_hash")
                .map_err(|e| db_error("Failed to get verification_code_hash", e))?,
            verification_expires_at: row
                .try_get::<Option<DateTime<Utc>>, _>("verification_expires_at")
                .map_err(|e| db_error("Failed to get verification_expires_at", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("Failed to get updated_at", e))?,
        })
    }
}

const COLUMNS: &str = r#"id, first_name, last_name, email, phone, password_hash,
       is_verified, verification_code_hash, verification_expires_at,
       created_at, updated_at"#;

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<CustomerAccount>, DomainError> {
        let query = format!(
            "SELECT {} FROM customers WHERE email = ? LIMIT 1",
            COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Customer lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerAccount>, DomainError> {
        let query = format!("SELECT {} FROM customers WHERE id = ? LIMIT 1", COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Customer lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, account: CustomerAccount) -> Result<CustomerAccount, DomainError> {
        let query = r#"
            INSERT INTO customers (
                id, first_name, last_name, email, phone, password_hash,
                is_verified, verification_code_hash, verification_expires_at,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.email)
            .bind(&account.phone)
            .bind(&account.password_hash)
            .bind(account.is_verified)
            .bind(&account.verification_code_hash)
            .bind(account.verification_expires_at)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error("customer email", e))?;

        Ok(account)
    }

    async fn update(&self, account: CustomerAccount) -> Result<CustomerAccount, DomainError> {
        let query = r#"
            UPDATE customers SET
                first_name = ?,
                last_name = ?,
                phone = ?,
                password_hash = ?,
                is_verified = ?,
                verification_code_hash = ?,
                verification_expires_at = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.phone)
            .bind(&account.password_hash)
            .bind(account.is_verified)
            .bind(&account.verification_code_hash)
            .bind(account.verification_expires_at)
            .bind(account.updated_at)
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update customer", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("customer"));
        }

        Ok(account)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM customers WHERE email = ?) AS customer_exists";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check customer existence", e))?;

        let exists: i8 = row
            .try_get("customer_exists")
            .map_err(|e| db_error("Failed to get existence result", e))?;

        Ok(exists == 1)
    }
}
