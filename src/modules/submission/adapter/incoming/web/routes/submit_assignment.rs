use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::submission::application::domain::entities::SubmissionDraft;
use crate::submission::application::ports::incoming::use_cases::SubmitAssignmentError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssignmentRequest {
    pub assignment_id: Uuid,
    pub text: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

#[post("/api/submissions")]
pub async fn submit_assignment_handler(
    user: AuthenticatedUser,
    payload: web::Json<SubmitAssignmentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = payload.into_inner();
    let draft = SubmissionDraft {
        assignment_id: req.assignment_id,
        text: req.text,
        files: req.files,
    };

    match data.submission.submit.execute(user.caller(), draft).await {
        Ok(view) => ApiResponse::created_with_message(view, "Assignment submitted successfully"),

        Err(SubmitAssignmentError::AssignmentNotFound) => {
            ApiResponse::not_found("ASSIGNMENT_NOT_FOUND", "Assignment not found or inactive")
        }

        Err(SubmitAssignmentError::Invalid(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(e @ SubmitAssignmentError::AlreadySubmitted) => {
            ApiResponse::conflict("ALREADY_SUBMITTED", &e.to_string())
        }

        Err(SubmitAssignmentError::Denied(denied)) => access_denied_response(denied),

        Err(SubmitAssignmentError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to store submission");
            ApiResponse::internal_error()
        }
    }
}
