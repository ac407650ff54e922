use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::{AccessDenied, Caller};
use crate::submission::application::domain::entities::{
    SubmissionEdit, SubmissionValidationError, SubmissionView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSubmissionError {
    #[error("Submission not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] SubmissionValidationError),

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSubmissionUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        submission_id: Uuid,
        edit: SubmissionEdit,
    ) -> Result<SubmissionView, UpdateSubmissionError>;
}
