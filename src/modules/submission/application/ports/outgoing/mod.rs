pub mod submission_query;
pub mod submission_repository;

pub use submission_query::{SubmissionListFilter, SubmissionQuery, SubmissionQueryError};
pub use submission_repository::{SubmissionRepository, SubmissionRepositoryError};
