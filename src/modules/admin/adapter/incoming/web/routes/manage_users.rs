use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use crate::admin::application::domain::entities::UserDetail;
use crate::admin::application::ports::incoming::use_cases::ManageUsersError;
use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AdminUser};
use crate::auth::application::domain::credentials::NewAccount;
use crate::auth::application::domain::entities::{Role, UserId, UserProfile};
use crate::auth::application::ports::outgoing::UserListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, DEFAULT_PAGE_LIMIT};
use crate::AppState;

fn error_response(err: ManageUsersError, admin: &AdminUser) -> HttpResponse {
    match err {
        ManageUsersError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        e @ ManageUsersError::EmailAlreadyExists => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", &e.to_string())
        }

        e @ ManageUsersError::UserHasContent => {
            ApiResponse::conflict("USER_HAS_CONTENT", &e.to_string())
        }

        ManageUsersError::Denied(denied) => {
            warn!(admin_id = %admin.0.user_id, %denied, "Admin action refused");
            access_denied_response(denied)
        }

        e @ ManageUsersError::HashingFailed(_) | e @ ManageUsersError::RepositoryError(_) => {
            error!(admin_id = %admin.0.user_id, error = %e, "User administration failed");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Serialize)]
struct UsersPayload {
    users: Vec<UserProfile>,
}

#[derive(Serialize)]
struct UserPayload<T> {
    user: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub role: Option<Role>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

#[get("/api/admin/users")]
pub async fn list_users_handler(
    admin: AdminUser,
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.limit, DEFAULT_PAGE_LIMIT);
    let filter = UserListFilter {
        role: query.role,
        search: query.search,
        is_active: query.is_active,
    };

    match data.admin.users.list_users(admin.caller(), filter, page).await {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::paginated(
                UsersPayload {
                    users: result.items,
                },
                pagination,
            )
        }
        Err(e) => error_response(e, &admin),
    }
}

#[get("/api/admin/users/{id}")]
pub async fn get_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.admin.users.get_user(admin.caller(), user_id).await {
        Ok(detail) => ApiResponse::success(UserPayload::<UserDetail> { user: detail }),
        Err(e) => error_response(e, &admin),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[post("/api/admin/users")]
pub async fn create_user_handler(
    admin: AdminUser,
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let role = dto.role.unwrap_or_default();

    let account = match NewAccount::new(&dto.name, &dto.email, dto.password, role) {
        Ok(account) => account,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.admin.users.create_user(admin.caller(), account).await {
        Ok(user) => {
            ApiResponse::created_with_message(UserPayload { user }, "User created successfully")
        }
        Err(e) => error_response(e, &admin),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserStatusRequest {
    pub is_active: bool,
}

#[put("/api/admin/users/{id}/status")]
pub async fn update_user_status_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());
    let is_active = req.is_active;

    match data
        .admin
        .users
        .set_status(admin.caller(), user_id, is_active)
        .await
    {
        Ok(user) => {
            let message = if is_active {
                "User activated successfully"
            } else {
                "User deactivated successfully"
            };
            ApiResponse::success_with_message(UserPayload { user }, message)
        }
        Err(e) => error_response(e, &admin),
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRoleRequest {
    pub role: Role,
}

#[put("/api/admin/users/{id}/role")]
pub async fn update_user_role_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRoleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data
        .admin
        .users
        .set_role(admin.caller(), user_id, req.role)
        .await
    {
        Ok(user) => {
            ApiResponse::success_with_message(UserPayload { user }, "User role updated successfully")
        }
        Err(e) => error_response(e, &admin),
    }
}

#[delete("/api/admin/users/{id}")]
pub async fn delete_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.admin.users.delete_user(admin.caller(), user_id).await {
        Ok(()) => ApiResponse::message("User deleted successfully"),
        Err(e) => error_response(e, &admin),
    }
}
