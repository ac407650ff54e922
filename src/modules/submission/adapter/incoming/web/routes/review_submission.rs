use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::submission::application::ports::incoming::use_cases::ReviewSubmissionError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: String,
}

#[put("/api/submissions/{id}/feedback")]
pub async fn review_submission_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<FeedbackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let submission_id = path.into_inner();

    match data
        .submission
        .review
        .execute(user.caller(), submission_id, payload.into_inner().feedback)
        .await
    {
        Ok(view) => ApiResponse::success_with_message(view, "Feedback saved successfully"),

        Err(ReviewSubmissionError::NotFound) => {
            ApiResponse::not_found("SUBMISSION_NOT_FOUND", "Submission not found")
        }

        Err(ReviewSubmissionError::Invalid(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(ReviewSubmissionError::Denied(denied)) => access_denied_response(denied),

        Err(ReviewSubmissionError::RepositoryError(msg)) => {
            error!(%submission_id, error = %msg, "Failed to save feedback");
            ApiResponse::internal_error()
        }
    }
}
