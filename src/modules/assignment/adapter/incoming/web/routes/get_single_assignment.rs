use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::assignment::application::ports::incoming::use_cases::GetSingleAssignmentError;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/assignments/{id}")]
pub async fn get_single_assignment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let assignment_id = path.into_inner();

    match data
        .assignment
        .get_single
        .execute(user.caller(), assignment_id)
        .await
    {
        Ok(view) => ApiResponse::success(view),

        Err(GetSingleAssignmentError::NotFound) => {
            ApiResponse::not_found("ASSIGNMENT_NOT_FOUND", "Assignment not found")
        }

        Err(GetSingleAssignmentError::QueryFailed(msg)) => {
            error!(%assignment_id, error = %msg, "Failed to load assignment");
            ApiResponse::internal_error()
        }
    }
}
