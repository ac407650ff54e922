use async_trait::async_trait;

use crate::auth::application::domain::policy::{AccessDenied, Caller};
use crate::submission::application::domain::entities::{
    SubmissionDraft, SubmissionValidationError, SubmissionView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitAssignmentError {
    #[error("Assignment not found or inactive")]
    AssignmentNotFound,

    #[error(transparent)]
    Invalid(#[from] SubmissionValidationError),

    #[error("You have already submitted this assignment")]
    AlreadySubmitted,

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitAssignmentUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        draft: SubmissionDraft,
    ) -> Result<SubmissionView, SubmitAssignmentError>;
}
