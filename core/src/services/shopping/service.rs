//! Cart and favorites use cases

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::cart::CartItem;
use crate::domain::entities::favorite::FavoritePlant;
use crate::domain::entities::inventory::InventoryItem;
use crate::domain::value_objects::plant_preview::{CartItemRead, FavoritePlantRead, PlantPreview};
use crate::errors::DomainError;
use crate::repositories::{CartRepository, FavoriteRepository, InventoryRepository, StoreRepository};

/// Cart and favorites, keyed by customer.
///
/// Carts accumulate: adding a plant already in the cart grows its line.
/// Favorites are idempotent: re-favoriting returns the existing row.
pub struct ShoppingService<C, F, I, S>
where
    C: CartRepository,
    F: FavoriteRepository,
    I: InventoryRepository,
    S: StoreRepository,
{
    cart: Arc<C>,
    favorites: Arc<F>,
    inventory: Arc<I>,
    stores: Arc<S>,
}

impl<C, F, I, S> ShoppingService<C, F, I, S>
where
    C: CartRepository,
    F: FavoriteRepository,
    I: InventoryRepository,
    S: StoreRepository,
{
    pub fn new(cart: Arc<C>, favorites: Arc<F>, inventory: Arc<I>, stores: Arc<S>) -> Self {
        Self {
            cart,
            favorites,
            inventory,
            stores,
        }
    }

    /// Add a plant to the cart, accumulating onto an existing line.
    pub async fn add_to_cart(
        &self,
        customer_id: Uuid,
        inventory_item_id: Uuid,
        quantity: u32,
    ) -> Result<CartItemRead, DomainError> {
        if quantity == 0 {
            return Err(DomainError::validation("Quantity must be at least 1"));
        }
        let item = self.require_item(inventory_item_id).await?;

        let line = match self.cart.find_line(customer_id, inventory_item_id).await? {
            Some(mut line) => {
                line.add_quantity(quantity);
                self.cart.update(line).await?
            }
            None => {
                self.cart
                    .create(CartItem::new(customer_id, inventory_item_id, quantity))
                    .await?
            }
        };

        tracing::info!(
            customer_id = %customer_id,
            item_id = %inventory_item_id,
            quantity = line.quantity,
            event = "cart_line_set",
            "Cart line updated"
        );

        Ok(CartItemRead {
            id: line.id,
            customer_id: line.customer_id,
            quantity: line.quantity,
            added_at: line.added_at,
            plant: self.preview(&item).await?,
        })
    }

    /// List the cart with plant previews, oldest line first.
    ///
    /// Lines whose plant no longer exists are omitted.
    pub async fn list_cart(&self, customer_id: Uuid) -> Result<Vec<CartItemRead>, DomainError> {
        let lines = self.cart.list_by_customer(customer_id).await?;
        let mut out = Vec::with_capacity(lines.len());
        for line in lines {
            if let Some(item) = self.inventory.find_by_id(line.inventory_item_id).await? {
                out.push(CartItemRead {
                    id: line.id,
                    customer_id: line.customer_id,
                    quantity: line.quantity,
                    added_at: line.added_at,
                    plant: self.preview(&item).await?,
                });
            }
        }
        Ok(out)
    }

    /// Remove a cart line.
    pub async fn remove_cart_line(&self, line_id: Uuid) -> Result<(), DomainError> {
        if !self.cart.delete(line_id).await? {
            return Err(DomainError::not_found("cart item"));
        }
        Ok(())
    }

    /// Favorite a plant. Re-favoriting the same pair is a no-op returning
    /// the existing row.
    pub async fn add_favorite(
        &self,
        customer_id: Uuid,
        inventory_item_id: Uuid,
    ) -> Result<FavoritePlantRead, DomainError> {
        let item = self.require_item(inventory_item_id).await?;

        let favorite = match self
            .favorites
            .find_pair(customer_id, inventory_item_id)
            .await?
        {
            Some(existing) => existing,
            None => {
                let created = self
                    .favorites
                    .create(FavoritePlant::new(customer_id, inventory_item_id))
                    .await?;
                tracing::info!(
                    customer_id = %customer_id,
                    item_id = %inventory_item_id,
                    event = "plant_favorited",
                    "Plant favorited"
                );
                created
            }
        };

        Ok(FavoritePlantRead {
            id: favorite.id,
            customer_id: favorite.customer_id,
            created_at: favorite.created_at,
            plant: self.preview(&item).await?,
        })
    }

    /// List favorites with plant previews, oldest first.
    ///
    /// Favorites whose plant no longer exists are omitted.
    pub async fn list_favorites(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<FavoritePlantRead>, DomainError> {
        let favorites = self.favorites.list_by_customer(customer_id).await?;
        let mut out = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            if let Some(item) = self
                .inventory
                .find_by_id(favorite.inventory_item_id)
                .await?
            {
                out.push(FavoritePlantRead {
                    id: favorite.id,
                    customer_id: favorite.customer_id,
                    created_at: favorite.created_at,
                    plant: self.preview(&item).await?,
                });
            }
        }
        Ok(out)
    }

    /// Remove a favorite.
    pub async fn remove_favorite(&self, favorite_id: Uuid) -> Result<(), DomainError> {
        if !self.favorites.delete(favorite_id).await? {
            return Err(DomainError::not_found("favorite"));
        }
        Ok(())
    }

    async fn require_item(&self, id: Uuid) -> Result<InventoryItem, DomainError> {
        self.inventory
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("plant"))
    }

    async fn preview(&self, item: &InventoryItem) -> Result<PlantPreview, DomainError> {
        let store_name = self
            .stores
            .find_by_id(item.store_id)
            .await?
            .map(|s| s.name);
        Ok(PlantPreview::from_item(item, store_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::store::StoreProfile;
    use crate::repositories::{
        MockCartRepository, MockFavoriteRepository, MockInventoryRepository, MockStoreRepository,
    };

    struct Harness {
        service: ShoppingService<
            MockCartRepository,
            MockFavoriteRepository,
            MockInventoryRepository,
            MockStoreRepository,
        >,
        stores: Arc<MockStoreRepository>,
        inventory: Arc<MockInventoryRepository>,
    }

    fn harness() -> Harness {
        let stores = Arc::new(MockStoreRepository::default());
        let inventory = Arc::new(MockInventoryRepository::default());
        let service = ShoppingService::new(
            Arc::new(MockCartRepository::default()),
            Arc::new(MockFavoriteRepository::default()),
            Arc::clone(&inventory),
            Arc::clone(&stores),
        );
        Harness {
            service,
            stores,
            inventory,
        }
    }

    async fn seed_plant(h: &Harness) -> InventoryItem {
        let store = h
            .stores
            .create(StoreProfile::new(
                "Leafy Things".to_string(),
                "hello@leafy.example".to_string(),
                None,
                None,
                None,
                None,
                None,
            ))
            .await
            .unwrap();
        h.inventory
            .create(InventoryItem::new(
                store.id,
                "Monstera deliciosa".to_string(),
                None,
                42.5,
                3,
                None,
                None,
                false,
            ))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_to_cart_creates_line_with_preview() {
        let h = harness();
        let plant = seed_plant(&h).await;
        let customer = Uuid::new_v4();

        let line = h.service.add_to_cart(customer, plant.id, 2).await.unwrap();

        assert_eq!(line.quantity, 2);
        assert_eq!(line.plant.title, "Monstera deliciosa");
        assert_eq!(line.plant.store_name.as_deref(), Some("Leafy Things"));
    }

    #[tokio::test]
    async fn test_add_to_cart_accumulates_existing_line() {
        let h = harness();
        let plant = seed_plant(&h).await;
        let customer = Uuid::new_v4();

        let first = h.service.add_to_cart(customer, plant.id, 1).await.unwrap();
        let second = h.service.add_to_cart(customer, plant.id, 2).await.unwrap();

        // Same line, grown
        assert_eq!(second.id, first.id);
        assert_eq!(second.quantity, 3);
        assert_eq!(h.service.list_cart(customer).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_to_cart_rejects_zero_quantity_and_unknown_plant() {
        let h = harness();
        let plant = seed_plant(&h).await;
        let customer = Uuid::new_v4();

        assert!(matches!(
            h.service.add_to_cart(customer, plant.id, 0).await,
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            h.service.add_to_cart(customer, Uuid::new_v4(), 1).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_carts_are_isolated_per_customer() {
        let h = harness();
        let plant = seed_plant(&h).await;
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        h.service.add_to_cart(alice, plant.id, 1).await.unwrap();

        assert_eq!(h.service.list_cart(alice).await.unwrap().len(), 1);
        assert!(h.service.list_cart(bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_cart_line() {
        let h = harness();
        let plant = seed_plant(&h).await;
        let customer = Uuid::new_v4();
        let line = h.service.add_to_cart(customer, plant.id, 1).await.unwrap();

        h.service.remove_cart_line(line.id).await.unwrap();
        assert!(h.service.list_cart(customer).await.unwrap().is_empty());

        let err = h.service.remove_cart_line(line.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_favorites_are_idempotent() {
        let h = harness();
        let plant = seed_plant(&h).await;
        let customer = Uuid::new_v4();

        let first = h.service.add_favorite(customer, plant.id).await.unwrap();
        let second = h.service.add_favorite(customer, plant.id).await.unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(h.service.list_favorites(customer).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_favorite() {
        let h = harness();
        let plant = seed_plant(&h).await;
        let customer = Uuid::new_v4();
        let favorite = h.service.add_favorite(customer, plant.id).await.unwrap();

        h.service.remove_favorite(favorite.id).await.unwrap();
        assert!(h.service.list_favorites(customer).await.unwrap().is_empty());

        let err = h.service.remove_favorite(favorite.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
