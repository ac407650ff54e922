use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::assignment::application::ports::incoming::use_cases::{
    DeleteAssignmentError, DeleteAssignmentUseCase,
};
use crate::assignment::application::ports::outgoing::{
    AssignmentQuery, AssignmentRepository, AssignmentRepositoryError,
};
use crate::auth::application::domain::policy::{authorize, Action, Caller};

pub struct DeleteAssignmentService {
    repository: Arc<dyn AssignmentRepository>,
    query: Arc<dyn AssignmentQuery>,
}

impl DeleteAssignmentService {
    pub fn new(repository: Arc<dyn AssignmentRepository>, query: Arc<dyn AssignmentQuery>) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl DeleteAssignmentUseCase for DeleteAssignmentService {
    async fn execute(
        &self,
        caller: Caller,
        assignment_id: Uuid,
    ) -> Result<(), DeleteAssignmentError> {
        let current = self
            .query
            .find_by_id(assignment_id)
            .await
            .map_err(|e| DeleteAssignmentError::RepositoryError(e.to_string()))?
            .filter(|a| a.is_active)
            .ok_or(DeleteAssignmentError::NotFound)?;

        authorize(
            Some(&caller),
            Action::DeleteAssignment {
                created_by: current.created_by,
            },
        )?;

        self.repository
            .deactivate(assignment_id)
            .await
            .map_err(|e| match e {
                AssignmentRepositoryError::NotFound => DeleteAssignmentError::NotFound,
                other => DeleteAssignmentError::RepositoryError(other.to_string()),
            })?;

        info!(%assignment_id, user_id = %caller.user_id, "Assignment deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Role, UserId};
    use crate::auth::application::domain::policy::AccessDenied;
    use crate::tests::support::fixtures::sample_assignment;
    use crate::tests::support::mocks::{MockAssignmentQueryPort, MockAssignmentRepositoryPort};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn owner_soft_deletes() {
        let owner = UserId::from(Uuid::new_v4());
        let current = sample_assignment(owner);
        let id = current.id;

        let mut query = MockAssignmentQueryPort::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        let mut repo = MockAssignmentRepositoryPort::new();
        repo.expect_deactivate()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        let service = DeleteAssignmentService::new(Arc::new(repo), Arc::new(query));
        assert!(service
            .execute(Caller::new(owner, Role::Teacher), id)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn student_cannot_delete() {
        let current = sample_assignment(UserId::from(Uuid::new_v4()));
        let id = current.id;

        let mut query = MockAssignmentQueryPort::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(current.clone())));
        let mut repo = MockAssignmentRepositoryPort::new();
        repo.expect_deactivate().never();

        let service = DeleteAssignmentService::new(Arc::new(repo), Arc::new(query));
        let result = service
            .execute(Caller::new(UserId::from(Uuid::new_v4()), Role::Student), id)
            .await;

        assert!(matches!(
            result,
            Err(DeleteAssignmentError::Denied(AccessDenied::Forbidden))
        ));
    }

    #[tokio::test]
    async fn already_deleted_is_not_found() {
        let owner = UserId::from(Uuid::new_v4());
        let mut current = sample_assignment(owner);
        current.is_active = false;

        let mut query = MockAssignmentQueryPort::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(current.clone())));

        let service = DeleteAssignmentService::new(
            Arc::new(MockAssignmentRepositoryPort::new()),
            Arc::new(query),
        );
        let result = service
            .execute(Caller::new(owner, Role::Teacher), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(DeleteAssignmentError::NotFound)));
    }
}
