//! Store profile and inventory endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use pl_core::repositories::{InventoryRepository, StoreRepository};
use pl_shared::types::response::ApiResponse;

use crate::dto::store::{AddInventoryRequest, CreateStoreRequest, UpdateStoreRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::CatalogState;

/// POST /api/v1/stores
pub async fn create_store<S, I>(
    state: web::Data<CatalogState<S, I>>,
    request: web::Json<CreateStoreRequest>,
) -> HttpResponse
where
    S: StoreRepository + 'static,
    I: InventoryRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state.stores.create_store(request.into_inner().into()).await {
        Ok(store) => HttpResponse::Created().json(ApiResponse::success(store)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/stores
pub async fn list_stores<S, I>(state: web::Data<CatalogState<S, I>>) -> HttpResponse
where
    S: StoreRepository + 'static,
    I: InventoryRepository + 'static,
{
    match state.stores.list_stores().await {
        Ok(stores) => HttpResponse::Ok().json(ApiResponse::success(stores)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/stores/{id}
pub async fn get_store<S, I>(
    state: web::Data<CatalogState<S, I>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    S: StoreRepository + 'static,
    I: InventoryRepository + 'static,
{
    match state.stores.get_store(path.into_inner()).await {
        Ok(store) => HttpResponse::Ok().json(ApiResponse::success(store)),
        Err(error) => domain_error_response(&error),
    }
}

/// PATCH /api/v1/stores/{id}
pub async fn update_store<S, I>(
    state: web::Data<CatalogState<S, I>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateStoreRequest>,
) -> HttpResponse
where
    S: StoreRepository + 'static,
    I: InventoryRepository + 'static,
{
    match state
        .stores
        .update_store(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(store) => HttpResponse::Ok().json(ApiResponse::success(store)),
        Err(error) => domain_error_response(&error),
    }
}

/// POST /api/v1/stores/{id}/inventory
pub async fn add_inventory<S, I>(
    state: web::Data<CatalogState<S, I>>,
    path: web::Path<Uuid>,
    request: web::Json<AddInventoryRequest>,
) -> HttpResponse
where
    S: StoreRepository + 'static,
    I: InventoryRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state
        .stores
        .add_inventory(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(item) => HttpResponse::Created().json(ApiResponse::success(item)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/stores/{id}/inventory
pub async fn list_inventory<S, I>(
    state: web::Data<CatalogState<S, I>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    S: StoreRepository + 'static,
    I: InventoryRepository + 'static,
{
    match state.stores.list_inventory(path.into_inner()).await {
        Ok(items) => HttpResponse::Ok().json(ApiResponse::success(items)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/plants/featured
pub async fn list_featured<S, I>(state: web::Data<CatalogState<S, I>>) -> HttpResponse
where
    S: StoreRepository + 'static,
    I: InventoryRepository + 'static,
{
    match state.stores.list_featured().await {
        Ok(previews) => HttpResponse::Ok().json(ApiResponse::success(previews)),
        Err(error) => domain_error_response(&error),
    }
}
