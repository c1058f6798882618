//! Application factory
//!
//! Builds the Actix application from the per-area states so the same
//! wiring serves both the production binary and the integration tests.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use pl_core::repositories::{
    AdminRepository, CartRepository, CustomerRepository, FavoriteRepository, FeedbackRepository,
    InventoryRepository, StoreRepository,
};
use pl_core::services::verification::MailServiceTrait;
use pl_shared::types::response::ApiResponse;

use crate::middleware::cors::create_cors;
use crate::routes::{
    admins, customers, feedback, shopping, stores, AdminState, CatalogState, FeedbackState,
    ShoppingState, VerificationState,
};

/// Create and configure the application with all dependencies.
#[allow(clippy::type_complexity)]
pub fn create_app<R, M, S, I, C, F, FB, AD>(
    verification: web::Data<VerificationState<R, M>>,
    catalog: web::Data<CatalogState<S, I>>,
    shopping: web::Data<ShoppingState<C, F, I, S>>,
    feedback: web::Data<FeedbackState<FB>>,
    admin: web::Data<AdminState<AD>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: CustomerRepository + 'static,
    M: MailServiceTrait + 'static,
    S: StoreRepository + 'static,
    I: InventoryRepository + 'static,
    C: CartRepository + 'static,
    F: FavoriteRepository + 'static,
    FB: FeedbackRepository + 'static,
    AD: AdminRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(verification)
        .app_data(catalog)
        .app_data(shopping)
        .app_data(feedback)
        .app_data(admin)
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/customers")
                        .route("/register", web::post().to(customers::register::<R, M>))
                        .route("/verify", web::post().to(customers::verify::<R, M>))
                        .route(
                            "/resend-code",
                            web::post().to(customers::resend_code::<R, M>),
                        )
                        .route("/{id}/cart", web::post().to(shopping::add_to_cart::<C, F, I, S>))
                        .route("/{id}/cart", web::get().to(shopping::list_cart::<C, F, I, S>))
                        .route(
                            "/{id}/cart/{item_id}",
                            web::delete().to(shopping::remove_cart_line::<C, F, I, S>),
                        )
                        .route(
                            "/{id}/favorites",
                            web::post().to(shopping::add_favorite::<C, F, I, S>),
                        )
                        .route(
                            "/{id}/favorites",
                            web::get().to(shopping::list_favorites::<C, F, I, S>),
                        )
                        .route(
                            "/{id}/favorites/{item_id}",
                            web::delete().to(shopping::remove_favorite::<C, F, I, S>),
                        ),
                )
                .service(
                    web::scope("/stores")
                        .route("", web::post().to(stores::create_store::<S, I>))
                        .route("", web::get().to(stores::list_stores::<S, I>))
                        .route("/{id}", web::get().to(stores::get_store::<S, I>))
                        .route("/{id}", web::patch().to(stores::update_store::<S, I>))
                        .route(
                            "/{id}/inventory",
                            web::post().to(stores::add_inventory::<S, I>),
                        )
                        .route(
                            "/{id}/inventory",
                            web::get().to(stores::list_inventory::<S, I>),
                        ),
                )
                .route(
                    "/plants/featured",
                    web::get().to(stores::list_featured::<S, I>),
                )
                .service(
                    web::scope("/feedback")
                        .route("", web::post().to(feedback::submit_feedback::<FB>))
                        .route("", web::get().to(feedback::list_feedback::<FB>)),
                )
                .service(
                    web::scope("/admins")
                        .route("", web::post().to(admins::create_admin::<AD>))
                        .route("", web::get().to(admins::list_admins::<AD>))
                        .route(
                            "/{id}/view",
                            web::patch().to(admins::update_admin_view::<AD>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "plantera-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
