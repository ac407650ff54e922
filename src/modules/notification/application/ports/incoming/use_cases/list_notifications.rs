use async_trait::async_trait;

use crate::auth::application::domain::policy::Caller;
use crate::notification::application::domain::entities::NotificationView;
use crate::notification::application::ports::outgoing::NotificationQueryError;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListNotificationsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<NotificationQueryError> for ListNotificationsError {
    fn from(err: NotificationQueryError) -> Self {
        match err {
            NotificationQueryError::DatabaseError(msg) => ListNotificationsError::QueryFailed(msg),
        }
    }
}

/// One page of the caller's notifications plus their total unread count.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    pub page: PageResult<NotificationView>,
    pub unread_count: u64,
}

#[async_trait]
pub trait ListNotificationsUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<NotificationFeed, ListNotificationsError>;
}
