use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, DEFAULT_PAGE_LIMIT};
use crate::submission::application::domain::entities::SubmissionView;
use crate::submission::application::ports::incoming::use_cases::GetMySubmissionsError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MySubmissionsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Serialize)]
struct MySubmissionsPayload {
    submissions: Vec<SubmissionView>,
}

#[get("/api/submissions/my")]
pub async fn get_my_submissions_handler(
    user: AuthenticatedUser,
    query: web::Query<MySubmissionsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::new(query.page, query.limit, DEFAULT_PAGE_LIMIT);

    match data.submission.mine.execute(user.caller(), page).await {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::paginated(
                MySubmissionsPayload {
                    submissions: result.items,
                },
                pagination,
            )
        }

        Err(GetMySubmissionsError::QueryFailed(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to list own submissions");
            ApiResponse::internal_error()
        }
    }
}
