use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::auth::application::domain::entities::{Role, User, UserId};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    async fn set_active(&self, user_id: UserId, is_active: bool)
        -> Result<User, UserRepositoryError>;

    async fn set_role(&self, user_id: UserId, role: Role) -> Result<User, UserRepositoryError>;

    /// Hard delete. Notifications go with the account; owned assignments or
    /// submissions block the delete with `UserHasContent`.
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("User still owns assignments or submissions")]
    UserHasContent,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
