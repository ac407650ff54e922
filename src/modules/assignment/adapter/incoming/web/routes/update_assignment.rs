use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, warn};
use uuid::Uuid;

use crate::assignment::application::domain::entities::AssignmentChanges;
use crate::assignment::application::ports::incoming::use_cases::UpdateAssignmentError;
use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

/// Absent fields are left alone; `"instructions": null` clears them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub instructions: PatchField<String>,
    pub attachments: Option<Vec<String>>,
}

impl From<UpdateAssignmentRequest> for AssignmentChanges {
    fn from(req: UpdateAssignmentRequest) -> Self {
        AssignmentChanges {
            title: req.title,
            description: req.description,
            due_date: req.due_date,
            instructions: req.instructions,
            attachments: req.attachments,
        }
    }
}

#[put("/api/assignments/{id}")]
pub async fn update_assignment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateAssignmentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let assignment_id = path.into_inner();

    match data
        .assignment
        .update
        .execute(user.caller(), assignment_id, payload.into_inner().into())
        .await
    {
        Ok(view) => ApiResponse::success_with_message(view, "Assignment updated successfully"),

        Err(UpdateAssignmentError::NotFound) => {
            ApiResponse::not_found("ASSIGNMENT_NOT_FOUND", "Assignment not found")
        }

        Err(UpdateAssignmentError::Invalid(e)) => {
            warn!(%assignment_id, error = %e, "Rejected assignment update");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(UpdateAssignmentError::Denied(denied)) => access_denied_response(denied),

        Err(UpdateAssignmentError::RepositoryError(msg)) => {
            error!(%assignment_id, error = %msg, "Failed to update assignment");
            ApiResponse::internal_error()
        }
    }
}
