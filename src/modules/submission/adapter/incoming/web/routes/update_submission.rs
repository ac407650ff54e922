use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::submission::application::domain::entities::SubmissionEdit;
use crate::submission::application::ports::incoming::use_cases::UpdateSubmissionError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateSubmissionRequest {
    pub text: Option<String>,
    pub files: Option<Vec<String>>,
}

#[put("/api/submissions/{id}")]
pub async fn update_submission_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateSubmissionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let submission_id = path.into_inner();
    let req = payload.into_inner();
    let edit = SubmissionEdit {
        text: req.text,
        files: req.files,
    };

    match data
        .submission
        .update
        .execute(user.caller(), submission_id, edit)
        .await
    {
        Ok(view) => ApiResponse::success_with_message(view, "Submission updated successfully"),

        Err(UpdateSubmissionError::NotFound) => {
            ApiResponse::not_found("SUBMISSION_NOT_FOUND", "Submission not found")
        }

        Err(UpdateSubmissionError::Invalid(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(UpdateSubmissionError::Denied(denied)) => access_denied_response(denied),

        Err(UpdateSubmissionError::RepositoryError(msg)) => {
            error!(%submission_id, error = %msg, "Failed to update submission");
            ApiResponse::internal_error()
        }
    }
}
