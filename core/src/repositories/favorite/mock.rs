//! In-memory implementation of FavoriteRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::favorite::FavoritePlant;
use crate::errors::DomainError;

use super::trait_::FavoriteRepository;

/// Mock favorites repository backed by a map
#[derive(Default)]
pub struct MockFavoriteRepository {
    favorites: Arc<RwLock<HashMap<Uuid, FavoritePlant>>>,
}

impl MockFavoriteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn create(&self, favorite: FavoritePlant) -> Result<FavoritePlant, DomainError> {
        let mut favorites = self.favorites.write().await;
        favorites.insert(favorite.id, favorite.clone());
        Ok(favorite)
    }

    async fn find_pair(
        &self,
        customer_id: Uuid,
        inventory_item_id: Uuid,
    ) -> Result<Option<FavoritePlant>, DomainError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .values()
            .find(|f| f.customer_id == customer_id && f.inventory_item_id == inventory_item_id)
            .cloned())
    }

    async fn list_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<FavoritePlant>, DomainError> {
        let favorites = self.favorites.read().await;
        let mut matching: Vec<FavoritePlant> = favorites
            .values()
            .filter(|f| f.customer_id == customer_id)
            .cloned()
            .collect();
        matching.sort_by_key(|f| f.created_at);
        Ok(matching)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut favorites = self.favorites.write().await;
        Ok(favorites.remove(&id).is_some())
    }
}
