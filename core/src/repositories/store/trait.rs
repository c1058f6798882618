//! Store profile repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::store::StoreProfile;
use crate::errors::DomainError;

/// Repository contract for store profile persistence
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Persist a new store
    ///
    /// Fails with [`DomainError::Conflict`] when the email is already taken.
    async fn create(&self, store: StoreProfile) -> Result<StoreProfile, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoreProfile>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<StoreProfile>, DomainError>;

    /// List all stores, oldest first
    async fn list(&self) -> Result<Vec<StoreProfile>, DomainError>;

    /// Persist changes to an existing store
    async fn update(&self, store: StoreProfile) -> Result<StoreProfile, DomainError>;
}
