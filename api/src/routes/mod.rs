//! Route handlers and the shared application state they run against.

pub mod admins;
pub mod customers;
pub mod feedback;
pub mod shopping;
pub mod stores;

use std::sync::Arc;

use pl_core::repositories::{
    AdminRepository, CartRepository, CustomerRepository, FavoriteRepository, FeedbackRepository,
    InventoryRepository, StoreRepository,
};
use pl_core::services::admin::AdminService;
use pl_core::services::feedback::FeedbackService;
use pl_core::services::shopping::ShoppingService;
use pl_core::services::storefront::StoreService;
use pl_core::services::verification::{MailServiceTrait, VerificationService};

/// State for the customer verification endpoints
pub struct VerificationState<R, M>
where
    R: CustomerRepository,
    M: MailServiceTrait,
{
    pub verification: Arc<VerificationService<R, M>>,
}

/// State for store and inventory endpoints
pub struct CatalogState<S, I>
where
    S: StoreRepository,
    I: InventoryRepository,
{
    pub stores: Arc<StoreService<S, I>>,
}

/// State for cart and favorites endpoints
pub struct ShoppingState<C, F, I, S>
where
    C: CartRepository,
    F: FavoriteRepository,
    I: InventoryRepository,
    S: StoreRepository,
{
    pub shopping: Arc<ShoppingService<C, F, I, S>>,
}

/// State for feedback endpoints
pub struct FeedbackState<FB>
where
    FB: FeedbackRepository,
{
    pub feedback: Arc<FeedbackService<FB>>,
}

/// State for admin endpoints
pub struct AdminState<AD>
where
    AD: AdminRepository,
{
    pub admins: Arc<AdminService<AD>>,
}
