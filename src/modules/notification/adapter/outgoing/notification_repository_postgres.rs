use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::notifications::{ActiveModel, Column, Entity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::notification::application::domain::entities::{NewNotification, Notification};
use crate::notification::application::ports::outgoing::{
    NotificationRepository, NotificationRepositoryError,
};

#[derive(Clone)]
pub struct NotificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NotificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> NotificationRepositoryError {
    NotificationRepositoryError::DatabaseError(e.to_string())
}

fn to_active_model(notification: NewNotification) -> ActiveModel {
    let (related_id, related_type) = match notification.related {
        Some((id, kind)) => (Some(id), Some(kind.into())),
        None => (None, None),
    };

    ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(notification.user_id.value()),
        title: Set(notification.title),
        message: Set(notification.message),
        kind: Set(notification.kind.into()),
        read: Set(false),
        related_id: Set(related_id),
        related_type: Set(related_type),
        created_at: Set(Utc::now().fixed_offset()),
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryPostgres {
    async fn create_many(
        &self,
        notifications: Vec<NewNotification>,
    ) -> Result<u64, NotificationRepositoryError> {
        // insert_many rejects an empty VALUES list
        if notifications.is_empty() {
            return Ok(0);
        }

        Entity::insert_many(notifications.into_iter().map(to_active_model))
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn mark_read(&self, id: Uuid) -> Result<Notification, NotificationRepositoryError> {
        let updated = Entity::update_many()
            .col_expr(Column::Read, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(Model::into_domain)
            .ok_or(NotificationRepositoryError::NotFound)
    }

    async fn mark_all_read(&self, user_id: UserId) -> Result<u64, NotificationRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Read, Expr::value(true))
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::Read.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Uuid) -> Result<(), NotificationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(NotificationRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::adapter::outgoing::sea_orm_entity::notifications::DbNotificationKind;
    use crate::notification::application::domain::entities::{NotificationKind, RelatedType};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: Uuid, user_id: Uuid, read: bool) -> Model {
        Model {
            id,
            user_id,
            title: "New assignment: Essay".to_string(),
            message: "Due Friday".to_string(),
            kind: DbNotificationKind::Assignment,
            read,
            related_id: None,
            related_type: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    #[tokio::test]
    async fn create_many_skips_empty_batches() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = NotificationRepositoryPostgres::new(Arc::new(db));

        assert_eq!(repo.create_many(vec![]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn create_many_reports_rows_written() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(2)])
            .into_connection();
        let repo = NotificationRepositoryPostgres::new(Arc::new(db));

        let batch = (0..2)
            .map(|_| {
                NewNotification::new(
                    UserId::from(Uuid::new_v4()),
                    "New assignment: Essay",
                    "Due Friday".to_string(),
                    NotificationKind::Assignment,
                )
                .related_to(Uuid::new_v4(), RelatedType::Assignment)
            })
            .collect();

        assert_eq!(repo.create_many(batch).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn mark_read_returns_updated_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, Uuid::new_v4(), true)]])
            .into_connection();
        let repo = NotificationRepositoryPostgres::new(Arc::new(db));

        let notification = repo.mark_read(id).await.unwrap();
        assert_eq!(notification.id, id);
        assert!(notification.read);
    }

    #[tokio::test]
    async fn mark_read_on_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();
        let repo = NotificationRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.mark_read(Uuid::new_v4()).await,
            Err(NotificationRepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn mark_all_read_returns_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(5)])
            .into_connection();
        let repo = NotificationRepositoryPostgres::new(Arc::new(db));

        let updated = repo
            .mark_all_read(UserId::from(Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(updated, 5);
    }

    #[tokio::test]
    async fn delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0)])
            .into_connection();
        let repo = NotificationRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(NotificationRepositoryError::NotFound)
        ));
    }
}
