//! Handler for POST /api/v1/customers/resend-code

use actix_web::{web, HttpResponse};
use validator::Validate;

use pl_core::repositories::CustomerRepository;
use pl_core::services::verification::MailServiceTrait;
use pl_shared::types::response::ApiResponse;

use crate::dto::customer::{RegistrationResponse, ResendRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::VerificationState;

/// Issue a fresh verification code for a pending account.
///
/// Unknown email is 404; an already-verified account is a 400
/// `ALREADY_VERIFIED`. The previous code stops being valid.
pub async fn resend_code<R, M>(
    state: web::Data<VerificationState<R, M>>,
    request: web::Json<ResendRequest>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
    M: MailServiceTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state.verification.resend(&request.email).await {
        Ok(result) => {
            HttpResponse::Ok().json(ApiResponse::success(RegistrationResponse::from(result)))
        }
        Err(error) => domain_error_response(&error),
    }
}
