use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assignment::application::ports::outgoing::AssignmentQuery;
use crate::auth::application::domain::policy::{authorize, Action, Caller};
use crate::submission::application::domain::entities::{
    SubmissionEdit, SubmissionRevision, SubmissionView, SubmissionWindow,
};
use crate::submission::application::ports::incoming::use_cases::{
    UpdateSubmissionError, UpdateSubmissionUseCase,
};
use crate::submission::application::ports::outgoing::{
    SubmissionQuery, SubmissionRepository, SubmissionRepositoryError,
};

/// Resubmission by the owning student. Re-stamps `submitted_at` and
/// re-derives the stored status.
pub struct UpdateSubmissionService {
    repository: Arc<dyn SubmissionRepository>,
    query: Arc<dyn SubmissionQuery>,
    assignments: Arc<dyn AssignmentQuery>,
    window: SubmissionWindow,
}

impl UpdateSubmissionService {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        query: Arc<dyn SubmissionQuery>,
        assignments: Arc<dyn AssignmentQuery>,
        window: SubmissionWindow,
    ) -> Self {
        Self {
            repository,
            query,
            assignments,
            window,
        }
    }
}

#[async_trait]
impl UpdateSubmissionUseCase for UpdateSubmissionService {
    async fn execute(
        &self,
        caller: Caller,
        submission_id: Uuid,
        edit: SubmissionEdit,
    ) -> Result<SubmissionView, UpdateSubmissionError> {
        let current = self
            .query
            .find_by_id(submission_id)
            .await
            .map_err(|e| UpdateSubmissionError::RepositoryError(e.to_string()))?
            .ok_or(UpdateSubmissionError::NotFound)?;

        authorize(
            Some(&caller),
            Action::UpdateSubmission {
                student_id: current.student_id,
            },
        )?;

        let edit = edit.validate()?;

        let assignment = self
            .assignments
            .find_by_id(current.assignment_id)
            .await
            .map_err(|e| UpdateSubmissionError::RepositoryError(e.to_string()))?
            .ok_or(UpdateSubmissionError::NotFound)?;

        let now = Utc::now();
        let status = self.window.check(now, assignment.due_date).map_err(|e| {
            warn!(%submission_id, "Resubmission after due date");
            UpdateSubmissionError::from(e)
        })?;

        let updated = self
            .repository
            .resubmit(
                submission_id,
                SubmissionRevision {
                    submitted_at: now,
                    status,
                    text: edit.text,
                    files: edit.files,
                },
            )
            .await
            .map_err(|e| match e {
                SubmissionRepositoryError::NotFound => UpdateSubmissionError::NotFound,
                other => UpdateSubmissionError::RepositoryError(other.to_string()),
            })?;

        info!(%submission_id, status = %updated.status, "Submission updated");

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Role, UserId};
    use crate::auth::application::domain::policy::AccessDenied;
    use crate::submission::application::domain::entities::{
        Submission, SubmissionStatus, SubmissionValidationError,
    };
    use crate::tests::support::fixtures::{sample_assignment, sample_submission};
    use crate::tests::support::mocks::{
        MockAssignmentQueryPort, MockSubmissionQueryPort, MockSubmissionRepositoryPort,
    };
    use chrono::Duration;

    fn setup(
        current: Submission,
        due_in: Duration,
    ) -> (MockSubmissionQueryPort, MockAssignmentQueryPort) {
        let mut query = MockSubmissionQueryPort::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        query.expect_view_by_id().returning(|_| Ok(None));

        let mut assignments = MockAssignmentQueryPort::new();
        assignments.expect_find_by_id().returning(move |id| {
            let mut a = sample_assignment(UserId::from(Uuid::new_v4()));
            a.id = id;
            a.due_date = Utc::now() + due_in;
            Ok(Some(a))
        });

        (query, assignments)
    }

    #[tokio::test]
    async fn owner_replaces_files_and_restamps() {
        let student = UserId::from(Uuid::new_v4());
        let current = sample_submission(Uuid::new_v4(), student);
        let id = current.id;
        let before = current.submitted_at;
        let (query, assignments) = setup(current.clone(), Duration::days(1));

        let mut repo = MockSubmissionRepositoryPort::new();
        repo.expect_resubmit()
            .withf(move |_, r| {
                r.files.as_deref() == Some(&["v2.pdf".to_string()][..])
                    && r.status == SubmissionStatus::Submitted
                    && r.submitted_at >= before
            })
            .times(1)
            .returning(move |_, r| {
                let mut s = current.clone();
                s.submitted_at = r.submitted_at;
                s.files = r.files.unwrap_or_default();
                Ok(s)
            });

        let service = UpdateSubmissionService::new(
            Arc::new(repo),
            Arc::new(query),
            Arc::new(assignments),
            SubmissionWindow::default(),
        );
        let view = service
            .execute(
                Caller::new(student, Role::Student),
                id,
                SubmissionEdit {
                    text: None,
                    files: Some(vec!["v2.pdf".to_string()]),
                },
            )
            .await
            .unwrap();

        assert_eq!(view.submission.files, vec!["v2.pdf".to_string()]);
    }

    #[tokio::test]
    async fn other_student_is_forbidden() {
        let current = sample_submission(Uuid::new_v4(), UserId::from(Uuid::new_v4()));
        let id = current.id;
        let (query, assignments) = setup(current, Duration::days(1));
        let mut repo = MockSubmissionRepositoryPort::new();
        repo.expect_resubmit().never();

        let service = UpdateSubmissionService::new(
            Arc::new(repo),
            Arc::new(query),
            Arc::new(assignments),
            SubmissionWindow::default(),
        );
        let result = service
            .execute(
                Caller::new(UserId::from(Uuid::new_v4()), Role::Student),
                id,
                SubmissionEdit::default(),
            )
            .await;

        assert!(matches!(
            result,
            Err(UpdateSubmissionError::Denied(AccessDenied::Forbidden))
        ));
    }

    #[tokio::test]
    async fn update_after_due_date_is_rejected() {
        let student = UserId::from(Uuid::new_v4());
        let current = sample_submission(Uuid::new_v4(), student);
        let id = current.id;
        let (query, assignments) = setup(current, -Duration::hours(1));
        let mut repo = MockSubmissionRepositoryPort::new();
        repo.expect_resubmit().never();

        let service = UpdateSubmissionService::new(
            Arc::new(repo),
            Arc::new(query),
            Arc::new(assignments),
            SubmissionWindow::default(),
        );
        let result = service
            .execute(
                Caller::new(student, Role::Student),
                id,
                SubmissionEdit {
                    text: Some("late fix".to_string()),
                    files: None,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(UpdateSubmissionError::Invalid(SubmissionValidationError::PastDue))
        ));
    }

    #[tokio::test]
    async fn missing_submission_is_not_found() {
        let mut query = MockSubmissionQueryPort::new();
        query.expect_find_by_id().returning(|_| Ok(None));

        let service = UpdateSubmissionService::new(
            Arc::new(MockSubmissionRepositoryPort::new()),
            Arc::new(query),
            Arc::new(MockAssignmentQueryPort::new()),
            SubmissionWindow::default(),
        );
        let result = service
            .execute(
                Caller::new(UserId::from(Uuid::new_v4()), Role::Student),
                Uuid::new_v4(),
                SubmissionEdit::default(),
            )
            .await;

        assert!(matches!(result, Err(UpdateSubmissionError::NotFound)));
    }
}
