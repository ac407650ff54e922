use async_trait::async_trait;

use crate::auth::application::domain::policy::Caller;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::submission::application::domain::entities::SubmissionView;
use crate::submission::application::ports::outgoing::SubmissionQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMySubmissionsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SubmissionQueryError> for GetMySubmissionsError {
    fn from(err: SubmissionQueryError) -> Self {
        GetMySubmissionsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetMySubmissionsUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionView>, GetMySubmissionsError>;
}
