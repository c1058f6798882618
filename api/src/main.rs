//! Plantera API server binary.
//!
//! Wires MySQL repositories and the infrastructure services into the
//! application factory and runs the Actix server.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing_subscriber::EnvFilter;

use pl_api::app::create_app;
use pl_api::routes::{
    AdminState, CatalogState, FeedbackState, ShoppingState, VerificationState,
};
use pl_core::services::admin::AdminService;
use pl_core::services::feedback::FeedbackService;
use pl_core::services::shopping::ShoppingService;
use pl_core::services::storefront::StoreService;
use pl_core::services::verification::{
    OsRngCodeGenerator, SystemClock, VerificationConfig, VerificationService,
};
use pl_infra::database::mysql::{
    MySqlAdminRepository, MySqlCartRepository, MySqlCustomerRepository, MySqlFavoriteRepository,
    MySqlFeedbackRepository, MySqlInventoryRepository, MySqlStoreRepository,
};
use pl_infra::{DatabasePool, LogMailService, Sha256SecretHasher};
use pl_shared::config::database::DatabaseConfig;
use pl_shared::config::server::ServerConfig;
use pl_shared::config::verification::VerificationSettings;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Plantera API server");

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let verification_settings = VerificationSettings::from_env();

    let pool = DatabasePool::new(database_config).await?;
    let mysql = pool.get_pool().clone();

    // Repositories
    let customers = Arc::new(MySqlCustomerRepository::new(mysql.clone()));
    let stores = Arc::new(MySqlStoreRepository::new(mysql.clone()));
    let inventory = Arc::new(MySqlInventoryRepository::new(mysql.clone()));
    let cart = Arc::new(MySqlCartRepository::new(mysql.clone()));
    let favorites = Arc::new(MySqlFavoriteRepository::new(mysql.clone()));
    let feedback_repo = Arc::new(MySqlFeedbackRepository::new(mysql.clone()));
    let admins = Arc::new(MySqlAdminRepository::new(mysql));

    // Services
    let verification = Arc::new(VerificationService::new(
        Arc::clone(&customers),
        Arc::new(LogMailService::new()),
        Arc::new(Sha256SecretHasher::from_env()),
        Arc::new(SystemClock),
        Arc::new(OsRngCodeGenerator),
        VerificationConfig::from(verification_settings),
    ));
    let store_service = Arc::new(StoreService::new(Arc::clone(&stores), Arc::clone(&inventory)));
    let shopping_service = Arc::new(ShoppingService::new(
        cart,
        favorites,
        Arc::clone(&inventory),
        Arc::clone(&stores),
    ));
    let feedback_service = Arc::new(FeedbackService::new(feedback_repo));
    let admin_service = Arc::new(AdminService::new(admins));

    // Shared application state
    let verification_state = web::Data::new(VerificationState { verification });
    let catalog_state = web::Data::new(CatalogState {
        stores: store_service,
    });
    let shopping_state = web::Data::new(ShoppingState {
        shopping: shopping_service,
    });
    let feedback_state = web::Data::new(FeedbackState {
        feedback: feedback_service,
    });
    let admin_state = web::Data::new(AdminState {
        admins: admin_service,
    });

    let bind_address = server_config.bind_address();
    tracing::info!(bind_address = %bind_address, "Server binding");

    let mut server = HttpServer::new(move || {
        create_app(
            verification_state.clone(),
            catalog_state.clone(),
            shopping_state.clone(),
            feedback_state.clone(),
            admin_state.clone(),
        )
    });

    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
