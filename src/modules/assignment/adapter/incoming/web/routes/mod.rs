mod create_assignment;
mod delete_assignment;
mod get_assignments;
mod get_single_assignment;
mod update_assignment;

pub use create_assignment::create_assignment_handler;
pub use delete_assignment::delete_assignment_handler;
pub use get_assignments::get_assignments_handler;
pub use get_single_assignment::get_single_assignment_handler;
pub use update_assignment::update_assignment_handler;
