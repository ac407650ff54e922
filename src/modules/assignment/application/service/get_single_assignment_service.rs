use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::assignment::application::domain::entities::AssignmentView;
use crate::assignment::application::ports::incoming::use_cases::{
    GetSingleAssignmentError, GetSingleAssignmentUseCase,
};
use crate::assignment::application::ports::outgoing::AssignmentQuery;
use crate::auth::application::domain::policy::{authorize, Action, Caller};

pub struct GetSingleAssignmentService {
    query: Arc<dyn AssignmentQuery>,
}

impl GetSingleAssignmentService {
    pub fn new(query: Arc<dyn AssignmentQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetSingleAssignmentUseCase for GetSingleAssignmentService {
    async fn execute(
        &self,
        caller: Caller,
        assignment_id: Uuid,
    ) -> Result<AssignmentView, GetSingleAssignmentError> {
        let view = self
            .query
            .view_by_id(assignment_id)
            .await?
            .ok_or(GetSingleAssignmentError::NotFound)?;

        if !view.assignment.is_active {
            let action = Action::ViewInactiveAssignment {
                created_by: view.assignment.created_by,
            };
            if authorize(Some(&caller), action).is_err() {
                return Err(GetSingleAssignmentError::NotFound);
            }
        }

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Role, UserId};
    use crate::tests::support::fixtures::sample_assignment;
    use crate::tests::support::mocks::MockAssignmentQueryPort;

    fn query_returning(view: Option<AssignmentView>) -> MockAssignmentQueryPort {
        let mut query = MockAssignmentQueryPort::new();
        query
            .expect_view_by_id()
            .returning(move |_| Ok(view.clone()));
        query
    }

    fn inactive_view(owner: UserId) -> AssignmentView {
        let mut assignment = sample_assignment(owner);
        assignment.is_active = false;
        AssignmentView::from(assignment)
    }

    #[tokio::test]
    async fn active_assignment_is_visible_to_anyone() {
        let view = AssignmentView::from(sample_assignment(UserId::from(Uuid::new_v4())));
        let id = view.assignment.id;

        let service = GetSingleAssignmentService::new(Arc::new(query_returning(Some(view))));
        let result = service
            .execute(Caller::new(UserId::from(Uuid::new_v4()), Role::Student), id)
            .await
            .unwrap();

        assert_eq!(result.assignment.id, id);
    }

    #[tokio::test]
    async fn inactive_assignment_is_hidden_from_students() {
        let owner = UserId::from(Uuid::new_v4());
        let service =
            GetSingleAssignmentService::new(Arc::new(query_returning(Some(inactive_view(owner)))));

        let result = service
            .execute(
                Caller::new(UserId::from(Uuid::new_v4()), Role::Student),
                Uuid::new_v4(),
            )
            .await;

        assert!(matches!(result, Err(GetSingleAssignmentError::NotFound)));
    }

    #[tokio::test]
    async fn inactive_assignment_is_visible_to_creator_and_admin() {
        let owner = UserId::from(Uuid::new_v4());

        for caller in [
            Caller::new(owner, Role::Teacher),
            Caller::new(UserId::from(Uuid::new_v4()), Role::Admin),
        ] {
            let service = GetSingleAssignmentService::new(Arc::new(query_returning(Some(
                inactive_view(owner),
            ))));
            assert!(service.execute(caller, Uuid::new_v4()).await.is_ok());
        }
    }

    #[tokio::test]
    async fn missing_assignment_is_not_found() {
        let service = GetSingleAssignmentService::new(Arc::new(query_returning(None)));
        let result = service
            .execute(
                Caller::new(UserId::from(Uuid::new_v4()), Role::Teacher),
                Uuid::new_v4(),
            )
            .await;

        assert!(matches!(result, Err(GetSingleAssignmentError::NotFound)));
    }
}
