use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: String,

    #[schema(example = "new-secret")]
    pub new_password: String,
}

/// Change own password
#[utoipa::path(
    put,
    path = "/api/users/change-password",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Weak, reused or incorrect password", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/change-password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = ChangePasswordInput {
        current_password: req.current_password,
        new_password: req.new_password,
    };

    match data.auth.change_password.execute(user.caller(), input).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Password changed");
            ApiResponse::message("Password changed successfully")
        }

        Err(
            e @ (ChangePasswordError::MissingCurrentPassword
            | ChangePasswordError::WeakPassword(_)
            | ChangePasswordError::SamePassword),
        ) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),

        Err(e @ ChangePasswordError::IncorrectCurrentPassword) => {
            warn!(user_id = %user.user_id, "Password change with wrong current password");
            ApiResponse::bad_request("INVALID_PASSWORD", &e.to_string())
        }

        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ChangePasswordError::Denied(denied)) => access_denied_response(denied),

        Err(
            e @ (ChangePasswordError::HashingFailed(_) | ChangePasswordError::RepositoryError(_)),
        ) => {
            error!(user_id = %user.user_id, error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
