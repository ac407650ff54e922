use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::assignment::application::ports::outgoing::AssignmentQuery;
use crate::auth::application::domain::policy::{authorize, Action, Caller};
use crate::shared::pagination::PageRequest;
use crate::submission::application::domain::entities::{AssignmentBrief, SubmissionStatus};
use crate::submission::application::ports::incoming::use_cases::{
    AssignmentSubmissions, GetAssignmentSubmissionsError, GetAssignmentSubmissionsUseCase,
};
use crate::submission::application::ports::outgoing::{SubmissionListFilter, SubmissionQuery};

pub struct GetAssignmentSubmissionsService {
    query: Arc<dyn SubmissionQuery>,
    assignments: Arc<dyn AssignmentQuery>,
}

impl GetAssignmentSubmissionsService {
    pub fn new(query: Arc<dyn SubmissionQuery>, assignments: Arc<dyn AssignmentQuery>) -> Self {
        Self { query, assignments }
    }
}

#[async_trait]
impl GetAssignmentSubmissionsUseCase for GetAssignmentSubmissionsService {
    async fn execute(
        &self,
        caller: Caller,
        assignment_id: Uuid,
        status: Option<SubmissionStatus>,
        page: PageRequest,
    ) -> Result<AssignmentSubmissions, GetAssignmentSubmissionsError> {
        let assignment = self
            .assignments
            .find_by_id(assignment_id)
            .await
            .map_err(|e| GetAssignmentSubmissionsError::QueryFailed(e.to_string()))?
            .ok_or(GetAssignmentSubmissionsError::AssignmentNotFound)?;

        authorize(
            Some(&caller),
            Action::ReadAssignmentSubmissions {
                created_by: assignment.created_by,
            },
        )?;

        let filter = SubmissionListFilter {
            assignment_id: Some(assignment.id),
            status,
            ..Default::default()
        };
        let page = self
            .query
            .list(filter, page)
            .await
            .map_err(|e| GetAssignmentSubmissionsError::QueryFailed(e.to_string()))?;

        Ok(AssignmentSubmissions {
            assignment: AssignmentBrief {
                id: assignment.id,
                title: assignment.title,
                due_date: assignment.due_date,
            },
            page,
        })
    }
}
