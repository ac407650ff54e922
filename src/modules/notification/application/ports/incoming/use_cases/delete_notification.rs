use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::{AccessDenied, Caller};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteNotificationError {
    #[error("Notification not found")]
    NotFound,

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteNotificationUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        notification_id: Uuid,
    ) -> Result<(), DeleteNotificationError>;
}
