use std::sync::Arc;

use crate::assignment::application::ports::incoming::use_cases::{
    CreateAssignmentUseCase, DeleteAssignmentUseCase, GetAssignmentsUseCase,
    GetSingleAssignmentUseCase, UpdateAssignmentUseCase,
};

#[derive(Clone)]
pub struct AssignmentUseCases {
    pub create: Arc<dyn CreateAssignmentUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetAssignmentsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleAssignmentUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAssignmentUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAssignmentUseCase + Send + Sync>,
}
