use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::credentials::NewAccount;
use crate::auth::application::domain::entities::Role;
use crate::auth::application::use_cases::register_user::RegisterUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use super::login_user::AuthSessionResponse;

#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "secret1")]
    pub password: String,

    /// `student` (default) or `teacher`
    #[serde(default)]
    pub role: Option<Role>,
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSessionResponse>)),
        (status = 400, description = "Validation failed or admin role requested", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let role = dto.role.unwrap_or_default();

    let account = match NewAccount::new(&dto.name, &dto.email, dto.password, role) {
        Ok(account) => account,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.register.execute(account).await {
        Ok(session) => ApiResponse::created_with_message(
            AuthSessionResponse::from(session),
            "User registered successfully",
        ),

        Err(e @ RegisterUserError::AdminRegistrationNotAllowed) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(e @ RegisterUserError::EmailAlreadyExists) => {
            warn!("Registration rejected: email already in use");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", &e.to_string())
        }

        Err(e @ RegisterUserError::HashingFailed(_))
        | Err(e @ RegisterUserError::TokenGenerationFailed(_))
        | Err(e @ RegisterUserError::RepositoryError(_)) => {
            error!(error = %e, "Registration failed unexpectedly");
            ApiResponse::internal_error()
        }
    }
}
