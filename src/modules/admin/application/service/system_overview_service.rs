use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::admin::application::domain::entities::{ActivityEntry, SystemStats};
use crate::admin::application::ports::incoming::use_cases::{
    SystemOverviewError, SystemOverviewUseCase,
};
use crate::admin::application::ports::outgoing::AdminStatsQuery;
use crate::auth::application::domain::policy::{authorize, Action, Caller};
use crate::auth::application::ports::outgoing::UserQuery;

pub const ACTIVITY_LOG_LIMIT: u64 = 20;

pub struct SystemOverviewService {
    stats: Arc<dyn AdminStatsQuery>,
    users: Arc<dyn UserQuery>,
}

impl SystemOverviewService {
    pub fn new(stats: Arc<dyn AdminStatsQuery>, users: Arc<dyn UserQuery>) -> Self {
        Self { stats, users }
    }
}

#[async_trait]
impl SystemOverviewUseCase for SystemOverviewService {
    async fn stats(&self, caller: Caller) -> Result<SystemStats, SystemOverviewError> {
        authorize(Some(&caller), Action::ViewSystemStats)?;

        self.stats
            .system_stats(Utc::now())
            .await
            .map_err(|e| SystemOverviewError::QueryFailed(e.to_string()))
    }

    async fn activity_log(&self, caller: Caller) -> Result<Vec<ActivityEntry>, SystemOverviewError> {
        authorize(Some(&caller), Action::ViewSystemStats)?;

        let users = self
            .users
            .recently_active(ACTIVITY_LOG_LIMIT)
            .await
            .map_err(|e| SystemOverviewError::QueryFailed(e.to_string()))?;

        Ok(users.into_iter().map(ActivityEntry::from).collect())
    }
}
