//! Handler for POST /api/v1/customers/verify

use actix_web::{web, HttpResponse};
use validator::Validate;

use pl_core::repositories::CustomerRepository;
use pl_core::services::verification::MailServiceTrait;
use pl_shared::types::response::ApiResponse;

use crate::dto::customer::{VerifyRequest, VerifyResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::VerificationState;

/// Validate a verification code and mark the account verified.
///
/// Unknown email is 404; a wrong, expired, or absent code is a 400 with
/// the matching taxonomy code. Verifying a verified account is a no-op
/// success.
pub async fn verify<R, M>(
    state: web::Data<VerificationState<R, M>>,
    request: web::Json<VerifyRequest>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
    M: MailServiceTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state.verification.verify(&request.email, &request.code).await {
        Ok(outcome) => HttpResponse::Ok().json(ApiResponse::success(VerifyResponse::from(outcome))),
        Err(error) => domain_error_response(&error),
    }
}
