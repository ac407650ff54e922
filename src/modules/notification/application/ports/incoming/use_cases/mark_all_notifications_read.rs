use async_trait::async_trait;

use crate::auth::application::domain::policy::Caller;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkAllNotificationsReadError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait MarkAllNotificationsReadUseCase: Send + Sync {
    /// Returns the number of notifications that flipped to read.
    async fn execute(&self, caller: Caller) -> Result<u64, MarkAllNotificationsReadError>;
}
