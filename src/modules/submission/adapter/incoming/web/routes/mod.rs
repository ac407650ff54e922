mod get_assignment_submissions;
mod get_my_submissions;
mod review_submission;
mod submit_assignment;
mod update_submission;

pub use get_assignment_submissions::get_assignment_submissions_handler;
pub use get_my_submissions::get_my_submissions_handler;
pub use review_submission::review_submission_handler;
pub use submit_assignment::submit_assignment_handler;
pub use update_submission::update_submission_handler;
