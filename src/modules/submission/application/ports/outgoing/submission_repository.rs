use async_trait::async_trait;
use uuid::Uuid;

use crate::submission::application::domain::entities::{
    NewSubmission, Submission, SubmissionRevision,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionRepositoryError {
    #[error("Submission not found")]
    NotFound,

    /// The `(assignment, student)` unique index rejected the insert.
    #[error("Submission already exists")]
    Duplicate,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn create(&self, submission: NewSubmission)
        -> Result<Submission, SubmissionRepositoryError>;

    async fn resubmit(
        &self,
        id: Uuid,
        revision: SubmissionRevision,
    ) -> Result<Submission, SubmissionRepositoryError>;

    async fn set_feedback(
        &self,
        id: Uuid,
        feedback: String,
    ) -> Result<Submission, SubmissionRepositoryError>;
}
