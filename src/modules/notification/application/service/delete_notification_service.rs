use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::policy::{authorize, Action, Caller};
use crate::notification::application::ports::incoming::use_cases::{
    DeleteNotificationError, DeleteNotificationUseCase,
};
use crate::notification::application::ports::outgoing::{
    NotificationQuery, NotificationRepository, NotificationRepositoryError,
};

pub struct DeleteNotificationService {
    query: Arc<dyn NotificationQuery>,
    repository: Arc<dyn NotificationRepository>,
}

impl DeleteNotificationService {
    pub fn new(
        query: Arc<dyn NotificationQuery>,
        repository: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl DeleteNotificationUseCase for DeleteNotificationService {
    async fn execute(
        &self,
        caller: Caller,
        notification_id: Uuid,
    ) -> Result<(), DeleteNotificationError> {
        let notification = self
            .query
            .find_by_id(notification_id)
            .await
            .map_err(|e| DeleteNotificationError::RepositoryError(e.to_string()))?
            .ok_or(DeleteNotificationError::NotFound)?;

        authorize(
            Some(&caller),
            Action::DeleteNotification {
                recipient: notification.user_id,
            },
        )?;

        self.repository
            .delete(notification_id)
            .await
            .map_err(|e| match e {
                NotificationRepositoryError::NotFound => DeleteNotificationError::NotFound,
                NotificationRepositoryError::DatabaseError(msg) => {
                    DeleteNotificationError::RepositoryError(msg)
                }
            })?;

        info!(%notification_id, user_id = %caller.user_id, "Notification deleted");
        Ok(())
    }
}
