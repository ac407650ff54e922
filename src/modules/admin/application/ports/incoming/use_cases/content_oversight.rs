use async_trait::async_trait;

use crate::admin::application::domain::entities::AdminAssignmentStatus;
use crate::assignment::application::domain::entities::AssignmentView;
use crate::auth::application::domain::policy::{AccessDenied, Caller};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::submission::application::domain::entities::{SubmissionStatus, SubmissionView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentOversightError {
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminAssignmentQuery {
    pub search: Option<String>,
    pub status: AdminAssignmentStatus,
}

/// Cross-owner listings of assignments and submissions.
#[async_trait]
pub trait ContentOversightUseCase: Send + Sync {
    async fn assignments(
        &self,
        caller: Caller,
        query: AdminAssignmentQuery,
        page: PageRequest,
    ) -> Result<PageResult<AssignmentView>, ContentOversightError>;

    async fn submissions(
        &self,
        caller: Caller,
        status: Option<SubmissionStatus>,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionView>, ContentOversightError>;
}
