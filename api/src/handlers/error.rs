//! Mapping from domain errors to HTTP responses.
//!
//! Status mapping:
//! - verification taxonomy errors -> 400, with the taxonomy's stable code
//! - validation -> 400
//! - not found -> 404
//! - conflict -> 409
//! - storage and internal faults -> 500, with the detail kept in the logs

use actix_web::HttpResponse;
use validator::ValidationErrors;

use pl_core::errors::DomainError;
use pl_shared::types::response::ApiResponse;

/// Translate a domain error into its HTTP response.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error("VALIDATION_ERROR", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(
            ApiResponse::<()>::error("NOT_FOUND", format!("Resource not found: {}", resource)),
        ),
        DomainError::Conflict { resource } => HttpResponse::Conflict().json(
            ApiResponse::<()>::error("CONFLICT", format!("Conflict on {}", resource)),
        ),
        DomainError::Verification(e) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.code(), e.to_string()))
        }
        DomainError::Database { message } | DomainError::Internal { message } => {
            tracing::error!(error = %message, event = "internal_error", "Internal error");
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "INTERNAL_ERROR",
                "An internal error occurred",
            ))
        }
    }
}

/// Translate request-body validation failures into a 400 response.
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request data".to_string());

    HttpResponse::BadRequest().json(ApiResponse::<()>::error("VALIDATION_ERROR", message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_core::errors::VerificationError;

    #[test]
    fn test_verification_errors_are_bad_requests_with_taxonomy_codes() {
        let response =
            domain_error_response(&DomainError::Verification(VerificationError::CodeExpired));
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_and_conflict_statuses() {
        let response = domain_error_response(&DomainError::not_found("store"));
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);

        let response = domain_error_response(&DomainError::Conflict {
            resource: "store email".to_string(),
        });
        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_detail_is_not_leaked() {
        let response = domain_error_response(&DomainError::Database {
            message: "connection refused at 10.0.0.5:3306".to_string(),
        });
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
