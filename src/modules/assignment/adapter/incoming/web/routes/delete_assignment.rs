use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::assignment::application::ports::incoming::use_cases::DeleteAssignmentError;
use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/assignments/{id}")]
pub async fn delete_assignment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let assignment_id = path.into_inner();

    match data
        .assignment
        .delete
        .execute(user.caller(), assignment_id)
        .await
    {
        Ok(()) => ApiResponse::message("Assignment deleted successfully"),

        Err(DeleteAssignmentError::NotFound) => {
            ApiResponse::not_found("ASSIGNMENT_NOT_FOUND", "Assignment not found")
        }

        Err(DeleteAssignmentError::Denied(denied)) => access_denied_response(denied),

        Err(DeleteAssignmentError::RepositoryError(msg)) => {
            error!(%assignment_id, error = %msg, "Failed to delete assignment");
            ApiResponse::internal_error()
        }
    }
}
