//! CORS middleware configuration for cross-origin requests.
//!
//! Environment-aware: development allows any origin for easy local testing
//! of the storefront and admin frontends; production restricts origins to
//! the configured domains.
//!
//! # Environment Variables
//! - `ENVIRONMENT`: "production" switches to the restrictive settings
//! - `ALLOWED_ORIGINS`: comma-separated origin list (production only)
//! - `CORS_MAX_AGE`: preflight cache lifetime in seconds (default 3600)

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use pl_shared::config::Environment;

/// Creates a CORS middleware instance configured for the current environment.
pub fn create_cors() -> Cors {
    let environment = Environment::from_env();
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    if environment.is_production() {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(max_age);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!(origin = %origin, "Adding allowed origin");
                cors = cors.allowed_origin(origin);
            }
        }
    }

    if let Ok(web_domain) = env::var("WEB_DOMAIN") {
        cors = cors.allowed_origin(&format!("https://{}", web_domain));
        cors = cors.allowed_origin(&format!("https://www.{}", web_domain));
    }

    cors
}
