use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    AuthSessionResponse, ChangePasswordRequest, LoginRequestDto, RegisterUserRequest,
};
use crate::auth::application::domain::entities::{Role, UserProfile};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ClassSync API",
        version = "1.0.0",
        description = "Assignment management backend for teachers, students and administrators"
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::get_current_user_handler,
        crate::auth::adapter::incoming::web::routes::change_password_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            MessageResponse,
            RegisterUserRequest,
            LoginRequestDto,
            ChangePasswordRequest,
            AuthSessionResponse,
            UserProfile,
            Role
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "Account self-service endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
