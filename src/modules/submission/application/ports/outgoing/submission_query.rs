use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::submission::application::domain::entities::{
    Submission, SubmissionStatus, SubmissionView,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionListFilter {
    pub assignment_id: Option<Uuid>,
    pub student_id: Option<UserId>,
    pub status: Option<SubmissionStatus>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait SubmissionQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, SubmissionQueryError>;

    async fn exists_for(
        &self,
        assignment_id: Uuid,
        student_id: UserId,
    ) -> Result<bool, SubmissionQueryError>;

    /// Submission with its assignment brief and student summary.
    async fn view_by_id(&self, id: Uuid) -> Result<Option<SubmissionView>, SubmissionQueryError>;

    /// Most recently submitted first.
    async fn list(
        &self,
        filter: SubmissionListFilter,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionView>, SubmissionQueryError>;
}
