use async_trait::async_trait;

use crate::assignment::application::domain::entities::{AssignmentView, DueWindow};
use crate::assignment::application::ports::outgoing::AssignmentQueryError;
use crate::auth::application::domain::policy::Caller;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAssignmentsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<AssignmentQueryError> for GetAssignmentsError {
    fn from(err: AssignmentQueryError) -> Self {
        GetAssignmentsError::QueryFailed(err.to_string())
    }
}

/// Client-facing listing options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentListQuery {
    pub search: Option<String>,
    pub due: Option<DueWindow>,
}

#[async_trait]
pub trait GetAssignmentsUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        query: AssignmentListQuery,
        page: PageRequest,
    ) -> Result<PageResult<AssignmentView>, GetAssignmentsError>;
}
