//! Inventory item repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::inventory::InventoryItem;
use crate::errors::DomainError;

/// Repository contract for inventory persistence
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<InventoryItem>, DomainError>;

    /// List a store's items, oldest first
    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<InventoryItem>, DomainError>;

    /// List items flagged for the featured shelf
    async fn list_featured(&self) -> Result<Vec<InventoryItem>, DomainError>;
}
