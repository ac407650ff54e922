use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::policy::Caller;
use crate::notification::application::ports::incoming::use_cases::{
    MarkAllNotificationsReadError, MarkAllNotificationsReadUseCase,
};
use crate::notification::application::ports::outgoing::NotificationRepository;

pub struct MarkAllNotificationsReadService {
    repository: Arc<dyn NotificationRepository>,
}

impl MarkAllNotificationsReadService {
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl MarkAllNotificationsReadUseCase for MarkAllNotificationsReadService {
    async fn execute(&self, caller: Caller) -> Result<u64, MarkAllNotificationsReadError> {
        let updated = self
            .repository
            .mark_all_read(caller.user_id)
            .await
            .map_err(|e| MarkAllNotificationsReadError::RepositoryError(e.to_string()))?;

        info!(user_id = %caller.user_id, updated, "Marked notifications as read");
        Ok(updated)
    }
}
