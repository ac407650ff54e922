use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::admin::application::domain::entities::{SystemStats, UserActivityCounts};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminStatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Cross-table counters for the admin console.
#[async_trait]
pub trait AdminStatsQuery: Send + Sync {
    /// Time windows (recent, overdue, last 30 days) are relative to `now`.
    async fn system_stats(&self, now: DateTime<Utc>) -> Result<SystemStats, AdminStatsQueryError>;

    async fn user_activity_counts(
        &self,
        user_id: UserId,
    ) -> Result<UserActivityCounts, AdminStatsQueryError>;
}
