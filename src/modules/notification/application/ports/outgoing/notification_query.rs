use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::notification::application::domain::entities::Notification;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum NotificationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait NotificationQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, NotificationQueryError>;

    /// Newest first.
    async fn list_for_user(
        &self,
        user_id: UserId,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<PageResult<Notification>, NotificationQueryError>;

    async fn unread_count(&self, user_id: UserId) -> Result<u64, NotificationQueryError>;
}
