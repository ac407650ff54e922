use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::notifications::{Column, Entity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::notification::application::domain::entities::Notification;
use crate::notification::application::ports::outgoing::{
    NotificationQuery, NotificationQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct NotificationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NotificationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> NotificationQueryError {
    NotificationQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl NotificationQuery for NotificationQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, NotificationQueryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(Model::into_domain))
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<PageResult<Notification>, NotificationQueryError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id.value()));
        if unread_only {
            query = query.filter(Column::Read.eq(false));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            rows.into_iter().map(Model::into_domain).collect(),
            page,
            total,
        ))
    }

    async fn unread_count(&self, user_id: UserId) -> Result<u64, NotificationQueryError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::Read.eq(false))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
