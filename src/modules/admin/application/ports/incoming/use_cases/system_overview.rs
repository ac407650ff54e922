use async_trait::async_trait;

use crate::admin::application::domain::entities::{ActivityEntry, SystemStats};
use crate::auth::application::domain::policy::{AccessDenied, Caller};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SystemOverviewError {
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait SystemOverviewUseCase: Send + Sync {
    async fn stats(&self, caller: Caller) -> Result<SystemStats, SystemOverviewError>;

    /// Most recently active users, newest first.
    async fn activity_log(&self, caller: Caller) -> Result<Vec<ActivityEntry>, SystemOverviewError>;
}
