//! In-memory implementation of CartRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::cart::CartItem;
use crate::errors::DomainError;

use super::trait_::CartRepository;

/// Mock cart repository backed by a map
#[derive(Default)]
pub struct MockCartRepository {
    items: Arc<RwLock<HashMap<Uuid, CartItem>>>,
}

impl MockCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for MockCartRepository {
    async fn create(&self, item: CartItem) -> Result<CartItem, DomainError> {
        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_line(
        &self,
        customer_id: Uuid,
        inventory_item_id: Uuid,
    ) -> Result<Option<CartItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .find(|i| i.customer_id == customer_id && i.inventory_item_id == inventory_item_id)
            .cloned())
    }

    async fn update(&self, item: CartItem) -> Result<CartItem, DomainError> {
        let mut items = self.items.write().await;

        if !items.contains_key(&item.id) {
            return Err(DomainError::NotFound {
                resource: "cart item".to_string(),
            });
        }

        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<CartItem>, DomainError> {
        let items = self.items.read().await;
        let mut lines: Vec<CartItem> = items
            .values()
            .filter(|i| i.customer_id == customer_id)
            .cloned()
            .collect();
        lines.sort_by_key(|i| i.added_at);
        Ok(lines)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        Ok(items.remove(&id).is_some())
    }
}
