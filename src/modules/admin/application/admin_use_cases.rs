use std::sync::Arc;

use crate::admin::application::ports::incoming::use_cases::{
    ContentOversightUseCase, ManageUsersUseCase, SystemOverviewUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub users: Arc<dyn ManageUsersUseCase + Send + Sync>,
    pub overview: Arc<dyn SystemOverviewUseCase + Send + Sync>,
    pub content: Arc<dyn ContentOversightUseCase + Send + Sync>,
}
