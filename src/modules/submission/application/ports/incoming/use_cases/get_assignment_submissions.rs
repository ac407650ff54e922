use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::{AccessDenied, Caller};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::submission::application::domain::entities::{
    AssignmentBrief, SubmissionStatus, SubmissionView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAssignmentSubmissionsError {
    #[error("Assignment not found")]
    AssignmentNotFound,

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// A page of submissions for one assignment, with that assignment's brief.
#[derive(Debug, Clone)]
pub struct AssignmentSubmissions {
    pub assignment: AssignmentBrief,
    pub page: PageResult<SubmissionView>,
}

#[async_trait]
pub trait GetAssignmentSubmissionsUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        assignment_id: Uuid,
        status: Option<SubmissionStatus>,
        page: PageRequest,
    ) -> Result<AssignmentSubmissions, GetAssignmentSubmissionsError>;
}
