use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::assignments::{ActiveModel, Column, Entity, Model};
use crate::assignment::application::domain::entities::{
    Assignment, AssignmentChanges, NewAssignment,
};
use crate::assignment::application::ports::outgoing::{
    AssignmentRepository, AssignmentRepositoryError,
};
use crate::auth::application::domain::entities::UserId;

#[derive(Clone)]
pub struct AssignmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AssignmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> AssignmentRepositoryError {
    AssignmentRepositoryError::DatabaseError(e.to_string())
}

fn to_json(attachments: &[String]) -> Result<serde_json::Value, AssignmentRepositoryError> {
    serde_json::to_value(attachments)
        .map_err(|e| AssignmentRepositoryError::SerializationError(e.to_string()))
}

fn to_domain(model: Model) -> Result<Assignment, AssignmentRepositoryError> {
    model
        .into_domain()
        .map_err(|e| AssignmentRepositoryError::SerializationError(e.to_string()))
}

fn changes_to_active_model(changes: AssignmentChanges) -> Result<ActiveModel, AssignmentRepositoryError> {
    let attachments = match changes.attachments.as_deref() {
        Some(list) => Set(to_json(list)?),
        None => NotSet,
    };
    let instructions = match changes.instructions.into_update() {
        Some(value) => Set(value),
        None => NotSet,
    };

    Ok(ActiveModel {
        id: NotSet,
        title: changes.title.map_or(NotSet, Set),
        description: changes.description.map_or(NotSet, Set),
        due_date: changes.due_date.map_or(NotSet, |d| Set(d.fixed_offset())),
        instructions,
        is_active: NotSet,
        created_by: NotSet,
        attachments,
        created_at: NotSet,
        updated_at: Set(Utc::now().fixed_offset()),
    })
}

#[async_trait]
impl AssignmentRepository for AssignmentRepositoryPostgres {
    async fn create(
        &self,
        created_by: UserId,
        assignment: NewAssignment,
    ) -> Result<Assignment, AssignmentRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(assignment.title),
            description: Set(assignment.description),
            due_date: Set(assignment.due_date.fixed_offset()),
            instructions: Set(assignment.instructions),
            is_active: Set(true),
            created_by: Set(created_by.value()),
            attachments: Set(to_json(&assignment.attachments)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        to_domain(inserted)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: AssignmentChanges,
    ) -> Result<Assignment, AssignmentRepositoryError> {
        if changes.is_empty() {
            let current = Entity::find_by_id(id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(AssignmentRepositoryError::NotFound)?;
            return to_domain(current);
        }

        let updated = Entity::update_many()
            .set(changes_to_active_model(changes)?)
            .filter(Column::Id.eq(id))
            .filter(Column::IsActive.eq(true))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let model = updated
            .into_iter()
            .next()
            .ok_or(AssignmentRepositoryError::NotFound)?;
        to_domain(model)
    }

    async fn deactivate(&self, id: Uuid) -> Result<(), AssignmentRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(id))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(AssignmentRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::patch::PatchField;
    use chrono::Duration;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: Uuid, owner: Uuid) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            title: "Essay".to_string(),
            description: "Write about ownership".to_string(),
            due_date: now + Duration::days(3),
            instructions: Some("Two pages".to_string()),
            is_active: true,
            created_by: owner,
            attachments: serde_json::json!(["brief.pdf"]),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_returns_inserted_row() {
        let owner = Uuid::new_v4();
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, owner)]])
            .into_connection();
        let repo = AssignmentRepositoryPostgres::new(Arc::new(db));

        let created = repo
            .create(
                UserId::from(owner),
                NewAssignment {
                    title: "Essay".to_string(),
                    description: "Write about ownership".to_string(),
                    due_date: Utc::now() + Duration::days(3),
                    instructions: Some("Two pages".to_string()),
                    attachments: vec!["brief.pdf".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(created.id, id);
        assert_eq!(created.created_by, UserId::from(owner));
        assert_eq!(created.attachments, vec!["brief.pdf".to_string()]);
    }

    #[tokio::test]
    async fn update_applies_changes_and_returns_row() {
        let id = Uuid::new_v4();
        let mut row = model(id, Uuid::new_v4());
        row.title = "Renamed".to_string();
        row.instructions = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();
        let repo = AssignmentRepositoryPostgres::new(Arc::new(db));

        let updated = repo
            .update(
                id,
                AssignmentChanges {
                    title: Some("Renamed".to_string()),
                    instructions: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert!(updated.instructions.is_none());
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();
        let repo = AssignmentRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update(
                Uuid::new_v4(),
                AssignmentChanges {
                    description: Some("New".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AssignmentRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn deactivate_reports_missing_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = AssignmentRepositoryPostgres::new(Arc::new(db));

        assert!(repo.deactivate(Uuid::new_v4()).await.is_ok());
        assert!(matches!(
            repo.deactivate(Uuid::new_v4()).await,
            Err(AssignmentRepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn corrupt_attachments_surface_as_serialization_error() {
        let id = Uuid::new_v4();
        let mut row = model(id, Uuid::new_v4());
        row.attachments = serde_json::json!({"oops": true});

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();
        let repo = AssignmentRepositoryPostgres::new(Arc::new(db));

        let result = repo.update(id, AssignmentChanges::default()).await;
        assert!(matches!(
            result,
            Err(AssignmentRepositoryError::SerializationError(_))
        ));
    }
}
