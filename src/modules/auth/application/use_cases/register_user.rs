use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::credentials::NewAccount;
use crate::auth::application::domain::entities::{Role, UserProfile};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};

use super::AuthSession;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Self-registration as admin is not allowed")]
    AdminRegistrationNotAllowed,

    #[error("User already exists with this email")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, account: NewAccount) -> Result<AuthSession, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl RegisterUserUseCase {
    pub fn new(
        query: Arc<dyn UserQuery>,
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl IRegisterUserUseCase for RegisterUserUseCase {
    async fn execute(&self, account: NewAccount) -> Result<AuthSession, RegisterUserError> {
        if account.role() == Role::Admin {
            warn!(email = %account.email(), "Rejected self-registration as admin");
            return Err(RegisterUserError::AdminRegistrationNotAllowed);
        }

        let existing = self
            .query
            .find_by_email(account.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash_password(account.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(NewUser {
                name: account.name().to_string(),
                email: account.email().to_string(),
                password_hash,
                role: account.role(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .tokens
            .issue_token(user.id.value(), &user.email, user.role)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(AuthSession {
            token,
            user: UserProfile::from(user),
        })
    }
}
