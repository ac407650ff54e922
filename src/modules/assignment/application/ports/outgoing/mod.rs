pub mod assignment_query;
pub mod assignment_repository;

pub use assignment_query::{AssignmentListFilter, AssignmentQuery, AssignmentQueryError};
pub use assignment_repository::{AssignmentRepository, AssignmentRepositoryError};
