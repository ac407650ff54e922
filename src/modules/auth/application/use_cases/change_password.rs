use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::credentials::{validate_password, CredentialError};
use crate::auth::application::domain::policy::{authorize, AccessDenied, Action, Caller};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Current password is required")]
    MissingCurrentPassword,

    #[error(transparent)]
    WeakPassword(#[from] CredentialError),

    #[error("New password must be different from the current password")]
    SamePassword,

    #[error("Current password is incorrect")]
    IncorrectCurrentPassword,

    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Caller,
        input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError>;
}

#[derive(Clone)]
pub struct ChangePasswordUseCase {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ChangePasswordUseCase {
    pub fn new(
        query: Arc<dyn UserQuery>,
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl IChangePasswordUseCase for ChangePasswordUseCase {
    async fn execute(
        &self,
        caller: Caller,
        input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError> {
        authorize(
            Some(&caller),
            Action::ChangePassword {
                user_id: caller.user_id,
            },
        )?;

        if input.current_password.is_empty() {
            return Err(ChangePasswordError::MissingCurrentPassword);
        }
        validate_password(&input.new_password)?;
        if input.current_password == input.new_password {
            return Err(ChangePasswordError::SamePassword);
        }

        let user = self
            .query
            .find_by_id(caller.user_id)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let matches = self
            .hasher
            .verify_password(&input.current_password, &user.password_hash)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;
        if !matches {
            return Err(ChangePasswordError::IncorrectCurrentPassword);
        }

        let new_hash = self
            .hasher
            .hash_password(&input.new_password)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(user.id, new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}
