use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::assignment::application::domain::entities::{AssignmentDraft, AssignmentView};
use crate::assignment::application::ports::incoming::use_cases::{
    CreateAssignmentError, CreateAssignmentUseCase,
};
use crate::assignment::application::ports::outgoing::{AssignmentQuery, AssignmentRepository};
use crate::auth::application::domain::policy::{authorize, Action, Caller};
use crate::notification::application::ports::incoming::use_cases::{
    ActivityEvent, NotifyActivityUseCase,
};

pub struct CreateAssignmentService {
    repository: Arc<dyn AssignmentRepository>,
    query: Arc<dyn AssignmentQuery>,
    notifier: Arc<dyn NotifyActivityUseCase>,
}

impl CreateAssignmentService {
    pub fn new(
        repository: Arc<dyn AssignmentRepository>,
        query: Arc<dyn AssignmentQuery>,
        notifier: Arc<dyn NotifyActivityUseCase>,
    ) -> Self {
        Self {
            repository,
            query,
            notifier,
        }
    }
}

#[async_trait]
impl CreateAssignmentUseCase for CreateAssignmentService {
    async fn execute(
        &self,
        caller: Caller,
        draft: AssignmentDraft,
    ) -> Result<AssignmentView, CreateAssignmentError> {
        authorize(Some(&caller), Action::CreateAssignment)?;
        let assignment = draft.validate(Utc::now())?;

        let created = self
            .repository
            .create(caller.user_id, assignment)
            .await
            .map_err(|e| CreateAssignmentError::RepositoryError(e.to_string()))?;

        info!(assignment_id = %created.id, created_by = %caller.user_id, "Assignment created");

        self.notifier
            .notify(ActivityEvent::AssignmentPublished {
                assignment_id: created.id,
                title: created.title.clone(),
                due_date: created.due_date,
            })
            .await;

        // The row is already committed; a failed re-read only loses the creator summary.
        match self.query.view_by_id(created.id).await {
            Ok(Some(view)) => Ok(view),
            Ok(None) => Ok(AssignmentView::from(created)),
            Err(e) => {
                warn!(assignment_id = %created.id, error = %e, "Could not load assignment view");
                Ok(AssignmentView::from(created))
            }
        }
    }
}
