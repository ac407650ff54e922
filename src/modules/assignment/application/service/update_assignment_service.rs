use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assignment::application::domain::entities::{AssignmentChanges, AssignmentView};
use crate::assignment::application::ports::incoming::use_cases::{
    UpdateAssignmentError, UpdateAssignmentUseCase,
};
use crate::assignment::application::ports::outgoing::{
    AssignmentQuery, AssignmentRepository, AssignmentRepositoryError,
};
use crate::auth::application::domain::policy::{authorize, Action, Caller};

/// Edits an active assignment. Stored submission statuses are left untouched
/// when the due date moves.
pub struct UpdateAssignmentService {
    repository: Arc<dyn AssignmentRepository>,
    query: Arc<dyn AssignmentQuery>,
}

impl UpdateAssignmentService {
    pub fn new(repository: Arc<dyn AssignmentRepository>, query: Arc<dyn AssignmentQuery>) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl UpdateAssignmentUseCase for UpdateAssignmentService {
    async fn execute(
        &self,
        caller: Caller,
        assignment_id: Uuid,
        changes: AssignmentChanges,
    ) -> Result<AssignmentView, UpdateAssignmentError> {
        let current = self
            .query
            .find_by_id(assignment_id)
            .await
            .map_err(|e| UpdateAssignmentError::RepositoryError(e.to_string()))?
            .filter(|a| a.is_active)
            .ok_or(UpdateAssignmentError::NotFound)?;

        authorize(
            Some(&caller),
            Action::UpdateAssignment {
                created_by: current.created_by,
            },
        )?;

        let changes = changes.validate(Utc::now())?;
        if changes.is_empty() {
            return self.load_view(current.id).await.map(|v| v.unwrap_or_else(|| current.into()));
        }

        let updated = self
            .repository
            .update(assignment_id, changes)
            .await
            .map_err(|e| match e {
                AssignmentRepositoryError::NotFound => UpdateAssignmentError::NotFound,
                other => UpdateAssignmentError::RepositoryError(other.to_string()),
            })?;

        info!(%assignment_id, user_id = %caller.user_id, "Assignment updated");

        Ok(self
            .load_view(updated.id)
            .await?
            .unwrap_or_else(|| updated.into()))
    }
}

impl UpdateAssignmentService {
    async fn load_view(&self, id: Uuid) -> Result<Option<AssignmentView>, UpdateAssignmentError> {
        match self.query.view_by_id(id).await {
            Ok(view) => Ok(view),
            Err(e) => {
                warn!(assignment_id = %id, error = %e, "Could not load assignment view");
                Ok(None)
            }
        }
    }
}
