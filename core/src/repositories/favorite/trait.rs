//! Favorites repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::favorite::FavoritePlant;
use crate::errors::DomainError;

/// Repository contract for favorites persistence
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn create(&self, favorite: FavoritePlant) -> Result<FavoritePlant, DomainError>;

    /// Find the existing favorite for a customer/plant pair, if any
    async fn find_pair(
        &self,
        customer_id: Uuid,
        inventory_item_id: Uuid,
    ) -> Result<Option<FavoritePlant>, DomainError>;

    /// List a customer's favorites, oldest first
    async fn list_by_customer(&self, customer_id: Uuid)
        -> Result<Vec<FavoritePlant>, DomainError>;

    /// Remove a favorite; `Ok(false)` when no row matched
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
