use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::policy::{authorize, Action, Caller};
use crate::notification::application::domain::entities::NotificationView;
use crate::notification::application::ports::incoming::use_cases::{
    MarkNotificationReadError, MarkNotificationReadUseCase,
};
use crate::notification::application::ports::outgoing::{
    NotificationQuery, NotificationRepository, NotificationRepositoryError,
};

pub struct MarkNotificationReadService {
    query: Arc<dyn NotificationQuery>,
    repository: Arc<dyn NotificationRepository>,
}

impl MarkNotificationReadService {
    pub fn new(
        query: Arc<dyn NotificationQuery>,
        repository: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl MarkNotificationReadUseCase for MarkNotificationReadService {
    async fn execute(
        &self,
        caller: Caller,
        notification_id: Uuid,
    ) -> Result<NotificationView, MarkNotificationReadError> {
        let notification = self
            .query
            .find_by_id(notification_id)
            .await
            .map_err(|e| MarkNotificationReadError::RepositoryError(e.to_string()))?
            .ok_or(MarkNotificationReadError::NotFound)?;

        authorize(
            Some(&caller),
            Action::UpdateNotification {
                recipient: notification.user_id,
            },
        )?;

        let updated = self
            .repository
            .mark_read(notification_id)
            .await
            .map_err(|e| match e {
                NotificationRepositoryError::NotFound => MarkNotificationReadError::NotFound,
                NotificationRepositoryError::DatabaseError(msg) => {
                    MarkNotificationReadError::RepositoryError(msg)
                }
            })?;

        Ok(NotificationView::new(updated, Utc::now()))
    }
}
