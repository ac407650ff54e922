mod create_assignment;
mod delete_assignment;
mod get_assignments;
mod get_single_assignment;
mod update_assignment;

pub use create_assignment::{CreateAssignmentError, CreateAssignmentUseCase};
pub use delete_assignment::{DeleteAssignmentError, DeleteAssignmentUseCase};
pub use get_assignments::{AssignmentListQuery, GetAssignmentsError, GetAssignmentsUseCase};
pub use get_single_assignment::{GetSingleAssignmentError, GetSingleAssignmentUseCase};
pub use update_assignment::{UpdateAssignmentError, UpdateAssignmentUseCase};
