//! Cart repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::cart::CartItem;
use crate::errors::DomainError;

/// Repository contract for cart line persistence
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn create(&self, item: CartItem) -> Result<CartItem, DomainError>;

    /// Find the existing line for a customer/plant pair, if any
    async fn find_line(
        &self,
        customer_id: Uuid,
        inventory_item_id: Uuid,
    ) -> Result<Option<CartItem>, DomainError>;

    async fn update(&self, item: CartItem) -> Result<CartItem, DomainError>;

    /// List a customer's cart, oldest line first
    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<CartItem>, DomainError>;

    /// Remove a line; `Ok(false)` when no row matched
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
