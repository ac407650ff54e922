use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::ports::incoming::use_cases::MarkAllNotificationsReadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct MarkAllReadPayload {
    updated: u64,
}

#[put("/api/notifications/read-all")]
pub async fn mark_all_notifications_read_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.notification.mark_all_read.execute(user.caller()).await {
        Ok(updated) => ApiResponse::success_with_message(
            MarkAllReadPayload { updated },
            "All notifications marked as read",
        ),

        Err(MarkAllNotificationsReadError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to mark all notifications read");
            ApiResponse::internal_error()
        }
    }
}
