use async_trait::async_trait;
use uuid::Uuid;

use crate::assignment::application::domain::entities::AssignmentView;
use crate::assignment::application::ports::outgoing::AssignmentQueryError;
use crate::auth::application::domain::policy::Caller;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleAssignmentError {
    /// Also returned for inactive assignments the caller may not see.
    #[error("Assignment not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<AssignmentQueryError> for GetSingleAssignmentError {
    fn from(err: AssignmentQueryError) -> Self {
        GetSingleAssignmentError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetSingleAssignmentUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        assignment_id: Uuid,
    ) -> Result<AssignmentView, GetSingleAssignmentError>;
}
