//! Handler for POST /api/v1/customers/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use pl_core::repositories::CustomerRepository;
use pl_core::services::verification::{MailServiceTrait, RegisterCustomer};
use pl_shared::types::response::ApiResponse;

use crate::dto::customer::{RegisterRequest, RegistrationResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::VerificationState;

/// Register a customer account and issue a verification code.
///
/// Returns 201 with the pending account. A verified duplicate email is a
/// 400 `DUPLICATE_EMAIL`; a still-pending one is overwritten and gets a
/// fresh code.
pub async fn register<R, M>(
    state: web::Data<VerificationState<R, M>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    R: CustomerRepository + 'static,
    M: MailServiceTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    let input = RegisterCustomer {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        password: request.password.clone(),
    };

    match state.verification.register(input).await {
        Ok(result) => {
            HttpResponse::Created().json(ApiResponse::success(RegistrationResponse::from(result)))
        }
        Err(error) => domain_error_response(&error),
    }
}
