//! Cart and favorites endpoints, scoped under a customer id.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use pl_core::repositories::{
    CartRepository, FavoriteRepository, InventoryRepository, StoreRepository,
};
use pl_shared::types::response::ApiResponse;

use crate::dto::shopping::{AddCartRequest, AddFavoriteRequest};
use crate::handlers::domain_error_response;
use crate::routes::ShoppingState;

/// POST /api/v1/customers/{id}/cart
pub async fn add_to_cart<C, F, I, S>(
    state: web::Data<ShoppingState<C, F, I, S>>,
    path: web::Path<Uuid>,
    request: web::Json<AddCartRequest>,
) -> HttpResponse
where
    C: CartRepository + 'static,
    F: FavoriteRepository + 'static,
    I: InventoryRepository + 'static,
    S: StoreRepository + 'static,
{
    match state
        .shopping
        .add_to_cart(path.into_inner(), request.inventory_item_id, request.quantity)
        .await
    {
        Ok(line) => HttpResponse::Created().json(ApiResponse::success(line)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/customers/{id}/cart
pub async fn list_cart<C, F, I, S>(
    state: web::Data<ShoppingState<C, F, I, S>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    C: CartRepository + 'static,
    F: FavoriteRepository + 'static,
    I: InventoryRepository + 'static,
    S: StoreRepository + 'static,
{
    match state.shopping.list_cart(path.into_inner()).await {
        Ok(lines) => HttpResponse::Ok().json(ApiResponse::success(lines)),
        Err(error) => domain_error_response(&error),
    }
}

/// DELETE /api/v1/customers/{id}/cart/{item_id}
pub async fn remove_cart_line<C, F, I, S>(
    state: web::Data<ShoppingState<C, F, I, S>>,
    path: web::Path<(Uuid, Uuid)>,
) -> HttpResponse
where
    C: CartRepository + 'static,
    F: FavoriteRepository + 'static,
    I: InventoryRepository + 'static,
    S: StoreRepository + 'static,
{
    let (_customer_id, line_id) = path.into_inner();
    match state.shopping.remove_cart_line(line_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => domain_error_response(&error),
    }
}

/// POST /api/v1/customers/{id}/favorites
pub async fn add_favorite<C, F, I, S>(
    state: web::Data<ShoppingState<C, F, I, S>>,
    path: web::Path<Uuid>,
    request: web::Json<AddFavoriteRequest>,
) -> HttpResponse
where
    C: CartRepository + 'static,
    F: FavoriteRepository + 'static,
    I: InventoryRepository + 'static,
    S: StoreRepository + 'static,
{
    match state
        .shopping
        .add_favorite(path.into_inner(), request.inventory_item_id)
        .await
    {
        Ok(favorite) => HttpResponse::Created().json(ApiResponse::success(favorite)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/customers/{id}/favorites
pub async fn list_favorites<C, F, I, S>(
    state: web::Data<ShoppingState<C, F, I, S>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    C: CartRepository + 'static,
    F: FavoriteRepository + 'static,
    I: InventoryRepository + 'static,
    S: StoreRepository + 'static,
{
    match state.shopping.list_favorites(path.into_inner()).await {
        Ok(favorites) => HttpResponse::Ok().json(ApiResponse::success(favorites)),
        Err(error) => domain_error_response(&error),
    }
}

/// DELETE /api/v1/customers/{id}/favorites/{item_id}
pub async fn remove_favorite<C, F, I, S>(
    state: web::Data<ShoppingState<C, F, I, S>>,
    path: web::Path<(Uuid, Uuid)>,
) -> HttpResponse
where
    C: CartRepository + 'static,
    F: FavoriteRepository + 'static,
    I: InventoryRepository + 'static,
    S: StoreRepository + 'static,
{
    let (_customer_id, favorite_id) = path.into_inner();
    match state.shopping.remove_favorite(favorite_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => domain_error_response(&error),
    }
}
