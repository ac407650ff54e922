use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::{AccessDenied, Caller};
use crate::submission::application::domain::entities::{
    SubmissionValidationError, SubmissionView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewSubmissionError {
    #[error("Submission not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] SubmissionValidationError),

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Free-text feedback from the assignment's owner.
#[async_trait]
pub trait ReviewSubmissionUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        submission_id: Uuid,
        feedback: String,
    ) -> Result<SubmissionView, ReviewSubmissionError>;
}
