use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::{AccessDenied, Caller};
use crate::notification::application::domain::entities::NotificationView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkNotificationReadError {
    #[error("Notification not found")]
    NotFound,

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkNotificationReadUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        notification_id: Uuid,
    ) -> Result<NotificationView, MarkNotificationReadError>;
}
