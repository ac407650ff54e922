pub mod get_assignment_submissions_service;
pub mod get_my_submissions_service;
pub mod review_submission_service;
pub mod submit_assignment_service;
pub mod update_submission_service;

pub use get_assignment_submissions_service::GetAssignmentSubmissionsService;
pub use get_my_submissions_service::GetMySubmissionsService;
pub use review_submission_service::ReviewSubmissionService;
pub use submit_assignment_service::SubmitAssignmentService;
pub use update_submission_service::UpdateSubmissionService;
