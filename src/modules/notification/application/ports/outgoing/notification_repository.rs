use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::notification::application::domain::entities::{NewNotification, Notification};

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationRepositoryError {
    #[error("Notification not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Inserts a batch; returns the number of rows written.
    async fn create_many(
        &self,
        notifications: Vec<NewNotification>,
    ) -> Result<u64, NotificationRepositoryError>;

    async fn mark_read(&self, id: Uuid) -> Result<Notification, NotificationRepositoryError>;

    /// Marks every unread notification of `user_id`; returns how many changed.
    async fn mark_all_read(&self, user_id: UserId) -> Result<u64, NotificationRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), NotificationRepositoryError>;
}
