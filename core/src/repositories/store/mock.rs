//! In-memory implementation of StoreRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::store::StoreProfile;
use crate::errors::DomainError;

use super::trait_::StoreRepository;

/// Mock store repository backed by a map
#[derive(Default)]
pub struct MockStoreRepository {
    stores: Arc<RwLock<HashMap<Uuid, StoreProfile>>>,
}

impl MockStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreRepository for MockStoreRepository {
    async fn create(&self, store: StoreProfile) -> Result<StoreProfile, DomainError> {
        let mut stores = self.stores.write().await;

        if stores.values().any(|s| s.email == store.email) {
            return Err(DomainError::Conflict {
                resource: "store email".to_string(),
            });
        }

        stores.insert(store.id, store.clone());
        Ok(store)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoreProfile>, DomainError> {
        let stores = self.stores.read().await;
        Ok(stores.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoreProfile>, DomainError> {
        let stores = self.stores.read().await;
        Ok(stores.values().find(|s| s.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<StoreProfile>, DomainError> {
        let stores = self.stores.read().await;
        let mut all: Vec<StoreProfile> = stores.values().cloned().collect();
        all.sort_by_key(|s| s.created_at);
        Ok(all)
    }

    async fn update(&self, store: StoreProfile) -> Result<StoreProfile, DomainError> {
        let mut stores = self.stores.write().await;

        if !stores.contains_key(&store.id) {
            return Err(DomainError::NotFound {
                resource: "store".to_string(),
            });
        }

        stores.insert(store.id, store.clone());
        Ok(store)
    }
}
