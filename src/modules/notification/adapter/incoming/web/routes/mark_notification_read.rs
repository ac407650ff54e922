use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::notification::application::ports::incoming::use_cases::MarkNotificationReadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/notifications/{id}/read")]
pub async fn mark_notification_read_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let notification_id = path.into_inner();

    match data
        .notification
        .mark_read
        .execute(user.caller(), notification_id)
        .await
    {
        Ok(view) => ApiResponse::success_with_message(view, "Notification marked as read"),

        Err(MarkNotificationReadError::NotFound) => {
            ApiResponse::not_found("NOTIFICATION_NOT_FOUND", "Notification not found")
        }

        Err(MarkNotificationReadError::Denied(denied)) => access_denied_response(denied),

        Err(MarkNotificationReadError::RepositoryError(msg)) => {
            error!(%notification_id, error = %msg, "Failed to mark notification as read");
            ApiResponse::internal_error()
        }
    }
}
