use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError,
};
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, UserRole,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, user_id: UserId) -> Result<UserActiveModel, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        Ok(user.into())
    }

    async fn save(&self, active_user: UserActiveModel) -> Result<User, UserRepositoryError> {
        let updated = active_user.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => UserRepositoryError::UserNotFound,
            other => map_db_err(other),
        })?;

        Ok(updated.into_domain())
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(UserRole::from(user.role)),
            is_active: Set(true),
            last_login: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            map_db_err(e)
        })?;

        Ok(inserted.into_domain())
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.password_hash = Set(new_password_hash);

        self.save(active_user).await.map(|_| ())
    }

    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::LastLogin, Expr::value(at.fixed_offset()))
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }

    async fn set_active(
        &self,
        user_id: UserId,
        is_active: bool,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.is_active = Set(is_active);

        self.save(active_user).await
    }

    async fn set_role(&self, user_id: UserId, role: Role) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.role = Set(UserRole::from(role));

        self.save(active_user).await
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id.value())
            .exec(&*self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    UserRepositoryError::UserHasContent
                } else {
                    map_db_err(e)
                }
            })?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}
