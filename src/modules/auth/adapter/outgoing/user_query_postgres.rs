use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel, UserRole,
};
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_query::{
    UserListFilter, UserQuery, UserQueryError,
};
use crate::shared::db::contains_pattern;
use crate::shared::pagination::{PageRequest, PageResult};
use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, NullOrdering};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(UserModel::into_domain))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(UserModel::into_domain))
    }

    async fn list(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<User>, UserQueryError> {
        let mut query = UserEntity::find();

        if let Some(role) = filter.role {
            query = query.filter(UserColumn::Role.eq(UserRole::from(role)));
        }

        if let Some(is_active) = filter.is_active {
            query = query.filter(UserColumn::IsActive.eq(is_active));
        }

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = contains_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(UserColumn::Name).ilike(&pattern))
                    .add(Expr::col(UserColumn::Email).ilike(&pattern)),
            );
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let users = query
            .order_by_desc(UserColumn::CreatedAt)
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            users.into_iter().map(UserModel::into_domain).collect(),
            page,
            total,
        ))
    }

    async fn recently_active(&self, limit: u64) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .order_by_with_nulls(UserColumn::LastLogin, Order::Desc, NullOrdering::Last)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(users.into_iter().map(UserModel::into_domain).collect())
    }

    async fn active_student_ids(&self) -> Result<Vec<UserId>, UserQueryError> {
        let ids = UserEntity::find()
            .filter(UserColumn::Role.eq(UserRole::Student))
            .filter(UserColumn::IsActive.eq(true))
            .select_only()
            .column(UserColumn::Id)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(ids.into_iter().map(UserId::from).collect())
    }
}
