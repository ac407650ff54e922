// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    pub role: Option<Role>,
    /// Case-insensitive match on name or email.
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored user is invalid: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;

    /// `email` must already be normalized.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    /// Newest accounts first.
    async fn list(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<User>, UserQueryError>;

    /// Users ordered by most recent login, never-logged-in last.
    async fn recently_active(&self, limit: u64) -> Result<Vec<User>, UserQueryError>;

    /// Recipients of assignment announcements.
    async fn active_student_ids(&self) -> Result<Vec<UserId>, UserQueryError>;
}
