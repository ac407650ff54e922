use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assignment::application::ports::outgoing::AssignmentQuery;
use crate::auth::application::domain::policy::{authorize, Action, Caller};
use crate::submission::application::domain::entities::{validate_feedback, SubmissionView};
use crate::submission::application::ports::incoming::use_cases::{
    ReviewSubmissionError, ReviewSubmissionUseCase,
};
use crate::submission::application::ports::outgoing::{
    SubmissionQuery, SubmissionRepository, SubmissionRepositoryError,
};

pub struct ReviewSubmissionService {
    repository: Arc<dyn SubmissionRepository>,
    query: Arc<dyn SubmissionQuery>,
    assignments: Arc<dyn AssignmentQuery>,
}

impl ReviewSubmissionService {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        query: Arc<dyn SubmissionQuery>,
        assignments: Arc<dyn AssignmentQuery>,
    ) -> Self {
        Self {
            repository,
            query,
            assignments,
        }
    }
}

#[async_trait]
impl ReviewSubmissionUseCase for ReviewSubmissionService {
    async fn execute(
        &self,
        caller: Caller,
        submission_id: Uuid,
        feedback: String,
    ) -> Result<SubmissionView, ReviewSubmissionError> {
        let submission = self
            .query
            .find_by_id(submission_id)
            .await
            .map_err(|e| ReviewSubmissionError::RepositoryError(e.to_string()))?
            .ok_or(ReviewSubmissionError::NotFound)?;

        let assignment = self
            .assignments
            .find_by_id(submission.assignment_id)
            .await
            .map_err(|e| ReviewSubmissionError::RepositoryError(e.to_string()))?
            .ok_or(ReviewSubmissionError::NotFound)?;

        authorize(
            Some(&caller),
            Action::ReviewSubmission {
                assignment_owner: assignment.created_by,
            },
        )?;

        let feedback = validate_feedback(&feedback)?;

        let updated = self
            .repository
            .set_feedback(submission_id, feedback)
            .await
            .map_err(|e| match e {
                SubmissionRepositoryError::NotFound => ReviewSubmissionError::NotFound,
                other => ReviewSubmissionError::RepositoryError(other.to_string()),
            })?;

        info!(%submission_id, reviewer = %caller.user_id, "Feedback saved");

        match self.query.view_by_id(updated.id).await {
            Ok(Some(view)) => Ok(view),
            Ok(None) => Ok(SubmissionView::from(updated)),
            Err(e) => {
                warn!(%submission_id, error = %e, "Could not load submission view");
                Ok(SubmissionView::from(updated))
            }
        }
    }
}
