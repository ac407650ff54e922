use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::notification::application::domain::entities::NotificationView;
use crate::notification::application::ports::incoming::use_cases::ListNotificationsError;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

const DEFAULT_NOTIFICATION_LIMIT: u64 = 20;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotificationsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    #[serde(default)]
    pub unread_only: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotificationFeedPayload {
    notifications: Vec<NotificationView>,
    unread_count: u64,
}

#[get("/api/notifications")]
pub async fn list_notifications_handler(
    user: AuthenticatedUser,
    query: web::Query<ListNotificationsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.limit, DEFAULT_NOTIFICATION_LIMIT);

    match data
        .notification
        .list
        .execute(user.caller(), query.unread_only, page)
        .await
    {
        Ok(feed) => {
            let pagination = feed.page.pagination();
            ApiResponse::paginated(
                NotificationFeedPayload {
                    notifications: feed.page.items,
                    unread_count: feed.unread_count,
                },
                pagination,
            )
        }

        Err(ListNotificationsError::QueryFailed(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to list notifications");
            ApiResponse::internal_error()
        }
    }
}
