use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::admin::application::domain::entities::AdminAssignmentStatus;
use crate::admin::application::ports::incoming::use_cases::{
    AdminAssignmentQuery, ContentOversightError,
};
use crate::assignment::application::domain::entities::AssignmentView;
use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AdminUser};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, DEFAULT_PAGE_LIMIT};
use crate::submission::application::domain::entities::{SubmissionStatus, SubmissionView};
use crate::AppState;

fn error_response(err: ContentOversightError, admin: &AdminUser) -> HttpResponse {
    match err {
        ContentOversightError::Denied(denied) => access_denied_response(denied),
        ContentOversightError::QueryFailed(msg) => {
            error!(admin_id = %admin.0.user_id, error = %msg, "Content listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminAssignmentsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub status: Option<AdminAssignmentStatus>,
}

#[derive(Serialize)]
struct AssignmentsPayload {
    assignments: Vec<AssignmentView>,
}

#[get("/api/admin/assignments")]
pub async fn admin_assignments_handler(
    admin: AdminUser,
    query: web::Query<AdminAssignmentsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.limit, DEFAULT_PAGE_LIMIT);
    let listing = AdminAssignmentQuery {
        search: query.search,
        status: query.status.unwrap_or_default(),
    };

    match data
        .admin
        .content
        .assignments(admin.caller(), listing, page)
        .await
    {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::paginated(
                AssignmentsPayload {
                    assignments: result.items,
                },
                pagination,
            )
        }
        Err(e) => error_response(e, &admin),
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminSubmissionsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<SubmissionStatus>,
}

#[derive(Serialize)]
struct SubmissionsPayload {
    submissions: Vec<SubmissionView>,
}

#[get("/api/admin/submissions")]
pub async fn admin_submissions_handler(
    admin: AdminUser,
    query: web::Query<AdminSubmissionsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit, DEFAULT_PAGE_LIMIT);

    match data
        .admin
        .content
        .submissions(admin.caller(), query.status, page)
        .await
    {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::paginated(
                SubmissionsPayload {
                    submissions: result.items,
                },
                pagination,
            )
        }
        Err(e) => error_response(e, &admin),
    }
}
