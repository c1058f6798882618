//! DTOs for store profiles and inventory.

use serde::{Deserialize, Serialize};
use validator::Validate;

use pl_core::domain::entities::store::StoreUpdate;
use pl_core::services::storefront::{NewInventoryItem, NewStore};

/// Request body for POST /api/v1/stores
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateStoreRequest {
    #[validate(length(min = 1, max = 100, message = "Store name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid store email address"))]
    pub email: String,

    pub phone: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub banner_image: Option<String>,
    pub dashboard_message: Option<String>,
}

impl From<CreateStoreRequest> for NewStore {
    fn from(req: CreateStoreRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            bio: req.bio,
            address: req.address,
            banner_image: req.banner_image,
            dashboard_message: req.dashboard_message,
        }
    }
}

/// Request body for PATCH /api/v1/stores/{id}
///
/// Absent fields are left untouched; email is not patchable.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateStoreRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub banner_image: Option<String>,
    pub dashboard_message: Option<String>,
}

impl From<UpdateStoreRequest> for StoreUpdate {
    fn from(req: UpdateStoreRequest) -> Self {
        Self {
            name: req.name,
            phone: req.phone,
            bio: req.bio,
            address: req.address,
            banner_image: req.banner_image,
            dashboard_message: req.dashboard_message,
        }
    }
}

/// Request body for POST /api/v1/stores/{id}/inventory
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AddInventoryRequest {
    #[validate(length(min = 1, max = 200, message = "Plant name must be 1-200 characters"))]
    pub plant_name: String,

    pub description: Option<String>,

    pub price: f64,

    #[serde(default)]
    pub stock: u32,

    pub image_url: Option<String>,
    pub tags: Option<String>,

    #[serde(default)]
    pub is_featured: bool,
}

impl From<AddInventoryRequest> for NewInventoryItem {
    fn from(req: AddInventoryRequest) -> Self {
        Self {
            plant_name: req.plant_name,
            description: req.description,
            price: req.price,
            stock: req.stock,
            image_url: req.image_url,
            tags: req.tags,
            is_featured: req.is_featured,
        }
    }
}
