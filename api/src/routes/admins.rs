//! Admin profile endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use pl_core::repositories::AdminRepository;
use pl_shared::types::response::ApiResponse;

use crate::dto::admin::{CreateAdminRequest, UpdateAdminViewRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AdminState;

/// POST /api/v1/admins
pub async fn create_admin<AD>(
    state: web::Data<AdminState<AD>>,
    request: web::Json<CreateAdminRequest>,
) -> HttpResponse
where
    AD: AdminRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state.admins.create_admin(request.into_inner().into()).await {
        Ok(admin) => HttpResponse::Created().json(ApiResponse::success(admin)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/admins
pub async fn list_admins<AD>(state: web::Data<AdminState<AD>>) -> HttpResponse
where
    AD: AdminRepository + 'static,
{
    match state.admins.list_admins().await {
        Ok(admins) => HttpResponse::Ok().json(ApiResponse::success(admins)),
        Err(error) => domain_error_response(&error),
    }
}

/// PATCH /api/v1/admins/{id}/view
pub async fn update_admin_view<AD>(
    state: web::Data<AdminState<AD>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateAdminViewRequest>,
) -> HttpResponse
where
    AD: AdminRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state
        .admins
        .set_preferred_view(path.into_inner(), &request.preferred_view)
        .await
    {
        Ok(admin) => HttpResponse::Ok().json(ApiResponse::success(admin)),
        Err(error) => domain_error_response(&error),
    }
}
