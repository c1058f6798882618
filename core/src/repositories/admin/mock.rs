//! In-memory implementation of AdminRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::admin::AdminProfile;
use crate::errors::DomainError;

use super::trait_::AdminRepository;

/// Mock admin repository backed by a map
#[derive(Default)]
pub struct MockAdminRepository {
    admins: Arc<RwLock<HashMap<Uuid, AdminProfile>>>,
}

impl MockAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminRepository for MockAdminRepository {
    async fn create(&self, admin: AdminProfile) -> Result<AdminProfile, DomainError> {
        let mut admins = self.admins.write().await;

        if admins.values().any(|a| a.email == admin.email) {
            return Err(DomainError::Conflict {
                resource: "admin email".to_string(),
            });
        }

        admins.insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminProfile>, DomainError> {
        let admins = self.admins.read().await;
        Ok(admins.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminProfile>, DomainError> {
        let admins = self.admins.read().await;
        Ok(admins.values().find(|a| a.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<AdminProfile>, DomainError> {
        let admins = self.admins.read().await;
        let mut all: Vec<AdminProfile> = admins.values().cloned().collect();
        all.sort_by_key(|a| a.created_at);
        Ok(all)
    }

    async fn update(&self, admin: AdminProfile) -> Result<AdminProfile, DomainError> {
        let mut admins = self.admins.write().await;

        if !admins.contains_key(&admin.id) {
            return Err(DomainError::NotFound {
                resource: "admin".to_string(),
            });
        }

        admins.insert(admin.id, admin.clone());
        Ok(admin)
    }
}
