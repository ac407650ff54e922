use async_trait::async_trait;

use crate::admin::application::domain::entities::UserDetail;
use crate::auth::application::domain::credentials::NewAccount;
use crate::auth::application::domain::entities::{Role, UserId, UserProfile};
use crate::auth::application::domain::policy::{AccessDenied, Caller};
use crate::auth::application::ports::outgoing::{UserListFilter, UserQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ManageUsersError {
    #[error("User not found")]
    UserNotFound,

    #[error("User already exists with this email")]
    EmailAlreadyExists,

    #[error("User owns assignments or submissions; deactivate the account instead")]
    UserHasContent,

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for ManageUsersError {
    fn from(err: UserQueryError) -> Self {
        ManageUsersError::RepositoryError(err.to_string())
    }
}

/// Account administration from the admin console.
#[async_trait]
pub trait ManageUsersUseCase: Send + Sync {
    async fn list_users(
        &self,
        caller: Caller,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserProfile>, ManageUsersError>;

    async fn get_user(&self, caller: Caller, user_id: UserId)
        -> Result<UserDetail, ManageUsersError>;

    async fn create_user(
        &self,
        caller: Caller,
        account: NewAccount,
    ) -> Result<UserProfile, ManageUsersError>;

    async fn set_status(
        &self,
        caller: Caller,
        user_id: UserId,
        is_active: bool,
    ) -> Result<UserProfile, ManageUsersError>;

    async fn set_role(
        &self,
        caller: Caller,
        user_id: UserId,
        role: Role,
    ) -> Result<UserProfile, ManageUsersError>;

    /// Hard delete. Refused while the user owns assignments or submissions.
    async fn delete_user(&self, caller: Caller, user_id: UserId) -> Result<(), ManageUsersError>;
}
