pub mod create_assignment_service;
pub mod delete_assignment_service;
pub mod get_assignments_service;
pub mod get_single_assignment_service;
pub mod update_assignment_service;

pub use create_assignment_service::CreateAssignmentService;
pub use delete_assignment_service::DeleteAssignmentService;
pub use get_assignments_service::GetAssignmentsService;
pub use get_single_assignment_service::GetSingleAssignmentService;
pub use update_assignment_service::UpdateAssignmentService;
