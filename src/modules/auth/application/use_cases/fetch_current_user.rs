use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::domain::policy::{authorize, AccessDenied, Action, Caller};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Debug, thiserror::Error, Clone)]
pub enum FetchCurrentUserError {
    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait IFetchCurrentUserUseCase: Send + Sync {
    async fn execute(&self, caller: Caller) -> Result<UserProfile, FetchCurrentUserError>;
}

#[derive(Clone)]
pub struct FetchCurrentUserUseCase {
    query: Arc<dyn UserQuery>,
}

impl FetchCurrentUserUseCase {
    pub fn new(query: Arc<dyn UserQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IFetchCurrentUserUseCase for FetchCurrentUserUseCase {
    async fn execute(&self, caller: Caller) -> Result<UserProfile, FetchCurrentUserError> {
        authorize(
            Some(&caller),
            Action::ReadUser {
                user_id: caller.user_id,
            },
        )?;

        self.query
            .find_by_id(caller.user_id)
            .await?
            .map(UserProfile::from)
            .ok_or(FetchCurrentUserError::UserNotFound)
    }
}
