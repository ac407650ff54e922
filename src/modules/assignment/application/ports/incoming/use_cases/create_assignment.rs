use async_trait::async_trait;

use crate::assignment::application::domain::entities::{
    AssignmentDraft, AssignmentValidationError, AssignmentView,
};
use crate::auth::application::domain::policy::{AccessDenied, Caller};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAssignmentError {
    #[error(transparent)]
    Invalid(#[from] AssignmentValidationError),

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateAssignmentUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        draft: AssignmentDraft,
    ) -> Result<AssignmentView, CreateAssignmentError>;
}
