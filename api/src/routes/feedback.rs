//! Public feedback endpoints.

use actix_web::{web, HttpResponse};
use validator::Validate;

use pl_core::repositories::FeedbackRepository;
use pl_shared::types::response::ApiResponse;

use crate::dto::feedback::FeedbackRequest;
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::FeedbackState;

/// POST /api/v1/feedback
pub async fn submit_feedback<FB>(
    state: web::Data<FeedbackState<FB>>,
    request: web::Json<FeedbackRequest>,
) -> HttpResponse
where
    FB: FeedbackRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state.feedback.submit(&request.name, &request.message).await {
        Ok(entry) => HttpResponse::Created().json(ApiResponse::success(entry)),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/v1/feedback
pub async fn list_feedback<FB>(state: web::Data<FeedbackState<FB>>) -> HttpResponse
where
    FB: FeedbackRepository + 'static,
{
    match state.feedback.list().await {
        Ok(entries) => HttpResponse::Ok().json(ApiResponse::success(entries)),
        Err(error) => domain_error_response(&error),
    }
}
