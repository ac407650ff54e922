use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::assignment::application::domain::entities::{Assignment, AssignmentView, DueWindow};
use crate::auth::application::domain::entities::UserId;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentListFilter {
    /// Reference point for `due`.
    pub now: DateTime<Utc>,
    pub include_inactive: bool,
    pub created_by: Option<UserId>,
    /// Case-insensitive match on title or description.
    pub search: Option<String>,
    pub due: Option<DueWindow>,
}

impl AssignmentListFilter {
    pub fn active_only(now: DateTime<Utc>) -> Self {
        Self {
            now,
            include_inactive: false,
            created_by: None,
            search: None,
            due: None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssignmentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait AssignmentQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, AssignmentQueryError>;

    async fn view_by_id(&self, id: Uuid) -> Result<Option<AssignmentView>, AssignmentQueryError>;

    /// Newest first.
    async fn list(
        &self,
        filter: AssignmentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<AssignmentView>, AssignmentQueryError>;
}
