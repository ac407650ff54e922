use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::assignment::application::ports::outgoing::AssignmentQuery;
use crate::auth::application::domain::policy::{authorize, Action, Caller};
use crate::notification::application::ports::incoming::use_cases::{
    ActivityEvent, NotifyActivityUseCase,
};
use crate::submission::application::domain::entities::{
    NewSubmission, SubmissionDraft, SubmissionStatus, SubmissionView, SubmissionWindow,
};
use crate::submission::application::ports::incoming::use_cases::{
    SubmitAssignmentError, SubmitAssignmentUseCase,
};
use crate::submission::application::ports::outgoing::{
    SubmissionQuery, SubmissionRepository, SubmissionRepositoryError,
};

pub struct SubmitAssignmentService {
    repository: Arc<dyn SubmissionRepository>,
    query: Arc<dyn SubmissionQuery>,
    assignments: Arc<dyn AssignmentQuery>,
    notifier: Arc<dyn NotifyActivityUseCase>,
    window: SubmissionWindow,
}

impl SubmitAssignmentService {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        query: Arc<dyn SubmissionQuery>,
        assignments: Arc<dyn AssignmentQuery>,
        notifier: Arc<dyn NotifyActivityUseCase>,
        window: SubmissionWindow,
    ) -> Self {
        Self {
            repository,
            query,
            assignments,
            notifier,
            window,
        }
    }
}

#[async_trait]
impl SubmitAssignmentUseCase for SubmitAssignmentService {
    async fn execute(
        &self,
        caller: Caller,
        draft: SubmissionDraft,
    ) -> Result<SubmissionView, SubmitAssignmentError> {
        authorize(Some(&caller), Action::CreateSubmission)?;
        let draft = draft.validate()?;

        let assignment = self
            .assignments
            .find_by_id(draft.assignment_id)
            .await
            .map_err(|e| SubmitAssignmentError::RepositoryError(e.to_string()))?
            .filter(|a| a.is_active)
            .ok_or(SubmitAssignmentError::AssignmentNotFound)?;

        let now = Utc::now();
        let status = self.window.check(now, assignment.due_date).map_err(|e| {
            warn!(assignment_id = %assignment.id, student_id = %caller.user_id, "Submission after due date");
            SubmitAssignmentError::from(e)
        })?;

        let already = self
            .query
            .exists_for(assignment.id, caller.user_id)
            .await
            .map_err(|e| SubmitAssignmentError::RepositoryError(e.to_string()))?;
        if already {
            return Err(SubmitAssignmentError::AlreadySubmitted);
        }

        let created = self
            .repository
            .create(NewSubmission {
                assignment_id: assignment.id,
                student_id: caller.user_id,
                status,
                submitted_at: now,
                files: draft.files,
                text: draft.text,
            })
            .await
            .map_err(|e| match e {
                SubmissionRepositoryError::Duplicate => SubmitAssignmentError::AlreadySubmitted,
                other => SubmitAssignmentError::RepositoryError(other.to_string()),
            })?;

        info!(
            submission_id = %created.id,
            assignment_id = %assignment.id,
            student_id = %caller.user_id,
            status = %created.status,
            "Submission received"
        );

        self.notifier
            .notify(ActivityEvent::SubmissionReceived {
                submission_id: created.id,
                assignment_title: assignment.title.clone(),
                teacher_id: assignment.created_by,
                student_id: caller.user_id,
                late: created.status == SubmissionStatus::Late,
            })
            .await;

        match self.query.view_by_id(created.id).await {
            Ok(Some(view)) => Ok(view),
            Ok(None) => Ok(SubmissionView::from(created)),
            Err(e) => {
                warn!(submission_id = %created.id, error = %e, "Could not load submission view");
                Ok(SubmissionView::from(created))
            }
        }
    }
}
