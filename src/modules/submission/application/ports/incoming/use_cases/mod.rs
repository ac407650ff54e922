mod get_assignment_submissions;
mod get_my_submissions;
mod review_submission;
mod submit_assignment;
mod update_submission;

pub use get_assignment_submissions::{
    AssignmentSubmissions, GetAssignmentSubmissionsError, GetAssignmentSubmissionsUseCase,
};
pub use get_my_submissions::{GetMySubmissionsError, GetMySubmissionsUseCase};
pub use review_submission::{ReviewSubmissionError, ReviewSubmissionUseCase};
pub use submit_assignment::{SubmitAssignmentError, SubmitAssignmentUseCase};
pub use update_submission::{UpdateSubmissionError, UpdateSubmissionUseCase};
