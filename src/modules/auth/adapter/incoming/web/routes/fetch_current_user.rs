use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::use_cases::fetch_current_user::FetchCurrentUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Profile of the signed-in user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = inline(SuccessResponse<UserProfile>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.current_user.execute(user.caller()).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(FetchCurrentUserError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Token refers to a missing account");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchCurrentUserError::Denied(denied)) => access_denied_response(denied),

        Err(FetchCurrentUserError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load current user");
            ApiResponse::internal_error()
        }
    }
}
