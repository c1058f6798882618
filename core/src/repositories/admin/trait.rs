//! Admin profile repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::admin::AdminProfile;
use crate::errors::DomainError;

/// Repository contract for admin profile persistence
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Persist a new admin
    ///
    /// Fails with [`DomainError::Conflict`] when the email is already taken.
    async fn create(&self, admin: AdminProfile) -> Result<AdminProfile, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminProfile>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminProfile>, DomainError>;

    /// List all admins, oldest first
    async fn list(&self) -> Result<Vec<AdminProfile>, DomainError>;

    async fn update(&self, admin: AdminProfile) -> Result<AdminProfile, DomainError>;
}
