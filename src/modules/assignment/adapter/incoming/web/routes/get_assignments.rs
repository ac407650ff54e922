use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::assignment::application::domain::entities::DueWindow;
use crate::assignment::application::ports::incoming::use_cases::{
    AssignmentListQuery, GetAssignmentsError,
};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, DEFAULT_PAGE_LIMIT};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GetAssignmentsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<DueWindow>,
    pub search: Option<String>,
}

#[get("/api/assignments")]
pub async fn get_assignments_handler(
    user: AuthenticatedUser,
    query: web::Query<GetAssignmentsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.limit, DEFAULT_PAGE_LIMIT);
    let list_query = AssignmentListQuery {
        search: query.search,
        due: query.status,
    };

    match data
        .assignment
        .get_list
        .execute(user.caller(), list_query, page)
        .await
    {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::paginated(result.items, pagination)
        }

        Err(GetAssignmentsError::QueryFailed(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to list assignments");
            ApiResponse::internal_error()
        }
    }
}
