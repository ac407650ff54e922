use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::auth::application::use_cases::AuthSession;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "secret1")]
    pub password: String,
}

/// Token plus the profile of the signed-in user
#[derive(Serialize, ToSchema)]
pub struct AuthSessionResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: UserProfile,
}

impl From<AuthSession> for AuthSessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: session.user,
        }
    }
}

/// User login
///
/// Authenticates with email and password and returns a signed session token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthSessionResponse>)),
        (status = 400, description = "Malformed email or empty password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account is deactivated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.user.id, role = %session.user.role, "User logged in");
            ApiResponse::success_with_message(
                AuthSessionResponse::from(session),
                "Login successful",
            )
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::AccountDeactivated) => {
            warn!("Login failed: Account deactivated");
            ApiResponse::forbidden("ACCOUNT_DEACTIVATED", "Account is deactivated")
        }

        Err(e @ LoginError::PasswordVerificationFailed(_))
        | Err(e @ LoginError::TokenGenerationFailed(_))
        | Err(e @ LoginError::QueryError(_)) => {
            error!(error = %e, "Login failed unexpectedly");
            ApiResponse::internal_error()
        }
    }
}
