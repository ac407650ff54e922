use async_trait::async_trait;
use uuid::Uuid;

use crate::assignment::application::domain::entities::{
    AssignmentChanges, AssignmentValidationError, AssignmentView,
};
use crate::auth::application::domain::policy::{AccessDenied, Caller};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAssignmentError {
    #[error("Assignment not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] AssignmentValidationError),

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateAssignmentUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        assignment_id: Uuid,
        changes: AssignmentChanges,
    ) -> Result<AssignmentView, UpdateAssignmentError>;
}
