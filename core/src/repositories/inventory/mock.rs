//! In-memory implementation of InventoryRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::inventory::InventoryItem;
use crate::errors::DomainError;

use super::trait_::InventoryRepository;

/// Mock inventory repository backed by a map
#[derive(Default)]
pub struct MockInventoryRepository {
    items: Arc<RwLock<HashMap<Uuid, InventoryItem>>>,
}

impl MockInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryRepository for MockInventoryRepository {
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, DomainError> {
        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<InventoryItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<InventoryItem>, DomainError> {
        let items = self.items.read().await;
        let mut matching: Vec<InventoryItem> = items
            .values()
            .filter(|i| i.store_id == store_id)
            .cloned()
            .collect();
        matching.sort_by_key(|i| i.created_at);
        Ok(matching)
    }

    async fn list_featured(&self) -> Result<Vec<InventoryItem>, DomainError> {
        let items = self.items.read().await;
        let mut featured: Vec<InventoryItem> =
            items.values().filter(|i| i.is_featured).cloned().collect();
        featured.sort_by_key(|i| i.created_at);
        Ok(featured)
    }
}
