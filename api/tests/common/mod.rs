//! Shared test harness: builds the full application over in-memory
//! repositories so routes can be exercised without a database.

use std::sync::Arc;

use actix_web::{web, App};

use pl_api::app::create_app;
use pl_api::routes::{
    AdminState, CatalogState, FeedbackState, ShoppingState, VerificationState,
};
use pl_core::repositories::{
    MockAdminRepository, MockCartRepository, MockCustomerRepository, MockFavoriteRepository,
    MockFeedbackRepository, MockInventoryRepository, MockStoreRepository,
};
use pl_core::services::admin::AdminService;
use pl_core::services::feedback::FeedbackService;
use pl_core::services::shopping::ShoppingService;
use pl_core::services::storefront::StoreService;
use pl_core::services::verification::{
    OsRngCodeGenerator, SystemClock, VerificationConfig, VerificationService,
};
use pl_infra::{LogMailService, Sha256SecretHasher};

pub fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let customers = Arc::new(MockCustomerRepository::default());
    let stores = Arc::new(MockStoreRepository::default());
    let inventory = Arc::new(MockInventoryRepository::default());

    let verification = Arc::new(VerificationService::new(
        customers,
        Arc::new(LogMailService::new()),
        Arc::new(Sha256SecretHasher::new("test-salt")),
        Arc::new(SystemClock),
        Arc::new(OsRngCodeGenerator),
        VerificationConfig::default(),
    ));
    let store_service = Arc::new(StoreService::new(Arc::clone(&stores), Arc::clone(&inventory)));
    let shopping_service = Arc::new(ShoppingService::new(
        Arc::new(MockCartRepository::default()),
        Arc::new(MockFavoriteRepository::default()),
        inventory,
        stores,
    ));
    let feedback_service = Arc::new(FeedbackService::new(Arc::new(
        MockFeedbackRepository::default(),
    )));
    let admin_service = Arc::new(AdminService::new(Arc::new(MockAdminRepository::default())));

    create_app(
        web::Data::new(VerificationState { verification }),
        web::Data::new(CatalogState {
            stores: store_service,
        }),
        web::Data::new(ShoppingState {
            shopping: shopping_service,
        }),
        web::Data::new(FeedbackState {
            feedback: feedback_service,
        }),
        web::Data::new(AdminState {
            admins: admin_service,
        }),
    )
}
