//! Store and inventory use cases

use std::sync::Arc;

use pl_shared::utils::validation::validators;
use uuid::Uuid;

use crate::domain::entities::inventory::InventoryItem;
use crate::domain::entities::store::{StoreProfile, StoreUpdate};
use crate::domain::value_objects::plant_preview::PlantPreview;
use crate::errors::DomainError;
use crate::repositories::{InventoryRepository, StoreRepository};

const MAX_NAME_LENGTH: usize = 100;

/// Input for creating a store profile
#[derive(Debug, Clone)]
pub struct NewStore {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub banner_image: Option<String>,
    pub dashboard_message: Option<String>,
}

/// Input for listing a plant in a store's inventory
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub plant_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: u32,
    pub image_url: Option<String>,
    pub tags: Option<String>,
    pub is_featured: bool,
}

/// Store profile and inventory management
pub struct StoreService<S, I>
where
    S: StoreRepository,
    I: InventoryRepository,
{
    stores: Arc<S>,
    inventory: Arc<I>,
}

impl<S, I> StoreService<S, I>
where
    S: StoreRepository,
    I: InventoryRepository,
{
    pub fn new(stores: Arc<S>, inventory: Arc<I>) -> Self {
        Self { stores, inventory }
    }

    /// Create a store profile. The email must be unused.
    pub async fn create_store(&self, input: NewStore) -> Result<StoreProfile, DomainError> {
        if !validators::length_between(&input.name, 1, MAX_NAME_LENGTH) {
            return Err(DomainError::validation(
                "Store name must be between 1 and 100 characters",
            ));
        }
        if !validators::is_valid_email(&input.email) {
            return Err(DomainError::validation("Invalid store email address"));
        }

        let store = StoreProfile::new(
            input.name,
            input.email,
            input.phone,
            input.bio,
            input.address,
            input.banner_image,
            input.dashboard_message,
        );
        let store = self.stores.create(store).await?;

        tracing::info!(store_id = %store.id, event = "store_created", "Store profile created");
        Ok(store)
    }

    pub async fn get_store(&self, id: Uuid) -> Result<StoreProfile, DomainError> {
        self.stores
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("store"))
    }

    pub async fn list_stores(&self) -> Result<Vec<StoreProfile>, DomainError> {
        self.stores.list().await
    }

    /// Merge the provided fields into an existing store profile.
    pub async fn update_store(
        &self,
        id: Uuid,
        update: StoreUpdate,
    ) -> Result<StoreProfile, DomainError> {
        let mut store = self.get_store(id).await?;
        store.apply_update(update);
        let store = self.stores.update(store).await?;

        tracing::info!(store_id = %store.id, event = "store_updated", "Store profile updated");
        Ok(store)
    }

    /// List a plant under an existing store.
    pub async fn add_inventory(
        &self,
        store_id: Uuid,
        input: NewInventoryItem,
    ) -> Result<InventoryItem, DomainError> {
        if !validators::not_empty(&input.plant_name) {
            return Err(DomainError::validation("Plant name must not be empty"));
        }
        if input.price <= 0.0 {
            return Err(DomainError::validation("Price must be greater than zero"));
        }
        // The store must exist before anything is listed under it
        self.get_store(store_id).await?;

        let item = InventoryItem::new(
            store_id,
            input.plant_name,
            input.description,
            input.price,
            input.stock,
            input.image_url,
            input.tags,
            input.is_featured,
        );
        let item = self.inventory.create(item).await?;

        tracing::info!(
            store_id = %store_id,
            item_id = %item.id,
            event = "inventory_listed",
            "Inventory item listed"
        );
        Ok(item)
    }

    pub async fn list_inventory(&self, store_id: Uuid) -> Result<Vec<InventoryItem>, DomainError> {
        self.get_store(store_id).await?;
        self.inventory.list_by_store(store_id).await
    }

    /// The featured shelf: all featured items across stores, with the
    /// owning store's name resolved.
    pub async fn list_featured(&self) -> Result<Vec<PlantPreview>, DomainError> {
        let items = self.inventory.list_featured().await?;
        let mut previews = Vec::with_capacity(items.len());
        for item in &items {
            let store_name = self
                .stores
                .find_by_id(item.store_id)
                .await?
                .map(|s| s.name);
            previews.push(PlantPreview::from_item(item, store_name));
        }
        Ok(previews)
    }
}
