use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::notification::application::ports::incoming::use_cases::DeleteNotificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/notifications/{id}")]
pub async fn delete_notification_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let notification_id = path.into_inner();

    match data
        .notification
        .delete
        .execute(user.caller(), notification_id)
        .await
    {
        Ok(()) => ApiResponse::message("Notification deleted successfully"),

        Err(DeleteNotificationError::NotFound) => {
            ApiResponse::not_found("NOTIFICATION_NOT_FOUND", "Notification not found")
        }

        Err(DeleteNotificationError::Denied(denied)) => access_denied_response(denied),

        Err(DeleteNotificationError::RepositoryError(msg)) => {
            error!(%notification_id, error = %msg, "Failed to delete notification");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::domain::policy::Caller;
    use crate::notification::application::ports::incoming::use_cases::DeleteNotificationUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockDelete {
        result: Result<(), DeleteNotificationError>,
    }

    #[async_trait]
    impl DeleteNotificationUseCase for MockDelete {
        async fn execute(
            &self,
            _caller: Caller,
            _notification_id: Uuid,
        ) -> Result<(), DeleteNotificationError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<(), DeleteNotificationError>) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_delete_notification(MockDelete { result })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_notification_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/notifications/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer_for(Uuid::new_v4(), Role::Student)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_delete_notification_success() {
        let (status, body) = call(Ok(())).await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], "Notification deleted successfully");
    }

    #[actix_web::test]
    async fn test_delete_notification_missing_is_404() {
        let (status, body) = call(Err(DeleteNotificationError::NotFound)).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "NOTIFICATION_NOT_FOUND");
    }
}
