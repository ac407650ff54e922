use async_trait::async_trait;
use uuid::Uuid;

use crate::assignment::application::domain::entities::{
    Assignment, AssignmentChanges, NewAssignment,
};
use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssignmentRepositoryError {
    #[error("Assignment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Command side of the assignments table. Callers validate and authorize first.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn create(
        &self,
        created_by: UserId,
        assignment: NewAssignment,
    ) -> Result<Assignment, AssignmentRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: AssignmentChanges,
    ) -> Result<Assignment, AssignmentRepositoryError>;

    /// Soft delete.
    async fn deactivate(&self, id: Uuid) -> Result<(), AssignmentRepositoryError>;
}
