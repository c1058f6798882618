//! Customer account repository trait.
//!
//! The store's uniqueness constraint on email is the authoritative guard
//! against concurrent duplicate registration: `create` on an email that
//! already exists must fail with [`DomainError::Conflict`], which the
//! verification service translates into its taxonomy.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::customer::CustomerAccount;
use crate::errors::DomainError;

/// Repository contract for customer account persistence
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find an account by email (case-sensitive exact match)
    ///
    /// # Returns
    /// * `Ok(Some(account))` - account found
    /// * `Ok(None)` - no account for this email
    /// * `Err(DomainError)` - storage fault
    async fn find_by_email(&self, email: &str) -> Result<Option<CustomerAccount>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerAccount>, DomainError>;

    /// Persist a new account
    ///
    /// Fails with [`DomainError::Conflict`] when the email is already taken.
    async fn create(&self, account: CustomerAccount) -> Result<CustomerAccount, DomainError>;

    /// Persist changes to an existing account
    ///
    /// Fails with [`DomainError::NotFound`] when no row matches the id.
    async fn update(&self, account: CustomerAccount) -> Result<CustomerAccount, DomainError>;

    /// Check whether an account exists for the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
