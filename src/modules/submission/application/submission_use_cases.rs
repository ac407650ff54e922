use std::sync::Arc;

use crate::submission::application::ports::incoming::use_cases::{
    GetAssignmentSubmissionsUseCase, GetMySubmissionsUseCase, ReviewSubmissionUseCase,
    SubmitAssignmentUseCase, UpdateSubmissionUseCase,
};

#[derive(Clone)]
pub struct SubmissionUseCases {
    pub submit: Arc<dyn SubmitAssignmentUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSubmissionUseCase + Send + Sync>,
    pub by_assignment: Arc<dyn GetAssignmentSubmissionsUseCase + Send + Sync>,
    pub mine: Arc<dyn GetMySubmissionsUseCase + Send + Sync>,
    pub review: Arc<dyn ReviewSubmissionUseCase + Send + Sync>,
}
