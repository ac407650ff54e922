use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::admin::application::domain::entities::ActivityEntry;
use crate::admin::application::ports::incoming::use_cases::SystemOverviewError;
use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AdminUser};
use crate::auth::application::domain::entities::Role;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn error_response(err: SystemOverviewError, admin: &AdminUser) -> HttpResponse {
    match err {
        SystemOverviewError::Denied(denied) => access_denied_response(denied),
        SystemOverviewError::QueryFailed(msg) => {
            error!(admin_id = %admin.0.user_id, error = %msg, "System overview query failed");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/stats")]
pub async fn system_stats_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.overview.stats(admin.caller()).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => error_response(e, &admin),
    }
}

#[derive(Serialize)]
struct LogsPayload {
    logs: Vec<ActivityEntry>,
}

#[get("/api/admin/logs")]
pub async fn activity_log_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.overview.activity_log(admin.caller()).await {
        Ok(logs) => ApiResponse::success(LogsPayload { logs }),
        Err(e) => error_response(e, &admin),
    }
}

#[derive(Serialize)]
struct HealthCaller {
    id: Uuid,
    email: String,
    role: Role,
}

#[derive(Serialize)]
struct AdminHealth {
    timestamp: DateTime<Utc>,
    user: HealthCaller,
}

/// Confirms the admin surface is reachable with the caller's credentials.
#[get("/api/admin/health")]
pub async fn admin_health_handler(admin: AdminUser) -> impl Responder {
    let AdminUser(user) = admin;

    ApiResponse::success_with_message(
        AdminHealth {
            timestamp: Utc::now(),
            user: HealthCaller {
                id: user.user_id,
                email: user.email,
                role: user.role,
            },
        },
        "Admin panel is healthy",
    )
}
