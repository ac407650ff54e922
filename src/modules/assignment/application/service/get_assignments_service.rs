use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::assignment::application::domain::entities::AssignmentView;
use crate::assignment::application::ports::incoming::use_cases::{
    AssignmentListQuery, GetAssignmentsError, GetAssignmentsUseCase,
};
use crate::assignment::application::ports::outgoing::{AssignmentListFilter, AssignmentQuery};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::domain::policy::Caller;
use crate::shared::pagination::{PageRequest, PageResult};

/// General listing: active assignments only; teachers see their own.
pub struct GetAssignmentsService {
    query: Arc<dyn AssignmentQuery>,
}

impl GetAssignmentsService {
    pub fn new(query: Arc<dyn AssignmentQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetAssignmentsUseCase for GetAssignmentsService {
    async fn execute(
        &self,
        caller: Caller,
        query: AssignmentListQuery,
        page: PageRequest,
    ) -> Result<PageResult<AssignmentView>, GetAssignmentsError> {
        let created_by = match caller.role {
            Role::Teacher => Some(caller.user_id),
            Role::Student | Role::Admin => None,
        };

        let filter = AssignmentListFilter {
            created_by,
            search: query.search,
            due: query.due,
            ..AssignmentListFilter::active_only(Utc::now())
        };

        Ok(self.query.list(filter, page).await?)
    }
}
