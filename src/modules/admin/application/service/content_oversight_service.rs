use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::admin::application::ports::incoming::use_cases::{
    AdminAssignmentQuery, ContentOversightError, ContentOversightUseCase,
};
use crate::assignment::application::domain::entities::AssignmentView;
use crate::assignment::application::ports::outgoing::{AssignmentListFilter, AssignmentQuery};
use crate::auth::application::domain::policy::{authorize, Action, Caller};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::submission::application::domain::entities::{SubmissionStatus, SubmissionView};
use crate::submission::application::ports::outgoing::{SubmissionListFilter, SubmissionQuery};

pub struct ContentOversightService {
    assignments: Arc<dyn AssignmentQuery>,
    submissions: Arc<dyn SubmissionQuery>,
}

impl ContentOversightService {
    pub fn new(assignments: Arc<dyn AssignmentQuery>, submissions: Arc<dyn SubmissionQuery>) -> Self {
        Self {
            assignments,
            submissions,
        }
    }
}

#[async_trait]
impl ContentOversightUseCase for ContentOversightService {
    async fn assignments(
        &self,
        caller: Caller,
        query: AdminAssignmentQuery,
        page: PageRequest,
    ) -> Result<PageResult<AssignmentView>, ContentOversightError> {
        authorize(Some(&caller), Action::ManageUsers)?;

        let filter = AssignmentListFilter {
            include_inactive: query.status.includes_inactive(),
            search: query.search,
            due: query.status.due_window(),
            ..AssignmentListFilter::active_only(Utc::now())
        };

        self.assignments
            .list(filter, page)
            .await
            .map_err(|e| ContentOversightError::QueryFailed(e.to_string()))
    }

    async fn submissions(
        &self,
        caller: Caller,
        status: Option<SubmissionStatus>,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionView>, ContentOversightError> {
        authorize(Some(&caller), Action::ManageUsers)?;

        let filter = SubmissionListFilter {
            status,
            ..SubmissionListFilter::default()
        };

        self.submissions
            .list(filter, page)
            .await
            .map_err(|e| ContentOversightError::QueryFailed(e.to_string()))
    }
}
