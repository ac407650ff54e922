use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, DEFAULT_PAGE_LIMIT};
use crate::submission::application::domain::entities::{
    AssignmentBrief, SubmissionStatus, SubmissionView,
};
use crate::submission::application::ports::incoming::use_cases::GetAssignmentSubmissionsError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AssignmentSubmissionsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<SubmissionStatus>,
}

#[derive(Serialize)]
struct AssignmentSubmissionsPayload {
    submissions: Vec<SubmissionView>,
    assignment: AssignmentBrief,
}

#[get("/api/submissions/assignment/{assignment_id}")]
pub async fn get_assignment_submissions_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<AssignmentSubmissionsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let assignment_id = path.into_inner();
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.limit, DEFAULT_PAGE_LIMIT);

    match data
        .submission
        .by_assignment
        .execute(user.caller(), assignment_id, query.status, page)
        .await
    {
        Ok(result) => {
            let pagination = result.page.pagination();
            ApiResponse::paginated(
                AssignmentSubmissionsPayload {
                    submissions: result.page.items,
                    assignment: result.assignment,
                },
                pagination,
            )
        }

        Err(GetAssignmentSubmissionsError::AssignmentNotFound) => {
            ApiResponse::not_found("ASSIGNMENT_NOT_FOUND", "Assignment not found")
        }

        Err(GetAssignmentSubmissionsError::Denied(denied)) => access_denied_response(denied),

        Err(GetAssignmentSubmissionsError::QueryFailed(msg)) => {
            error!(%assignment_id, error = %msg, "Failed to list submissions");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Role, UserId};
    use crate::auth::application::domain::policy::{AccessDenied, Caller};
    use crate::shared::pagination::PageResult;
    use crate::submission::application::ports::incoming::use_cases::{
        AssignmentSubmissions, GetAssignmentSubmissionsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use crate::tests::support::fixtures::sample_submission;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingList {
        seen_status: Arc<Mutex<Option<Option<SubmissionStatus>>>>,
        deny: bool,
    }

    #[async_trait]
    impl GetAssignmentSubmissionsUseCase for RecordingList {
        async fn execute(
            &self,
            _caller: Caller,
            assignment_id: Uuid,
            status: Option<SubmissionStatus>,
            page: PageRequest,
        ) -> Result<AssignmentSubmissions, GetAssignmentSubmissionsError> {
            if self.deny {
                return Err(AccessDenied::Forbidden.into());
            }
            *self.seen_status.lock().unwrap() = Some(status);
            let item = sample_submission(assignment_id, UserId::from(Uuid::new_v4()));
            Ok(AssignmentSubmissions {
                assignment: AssignmentBrief {
                    id: assignment_id,
                    title: "Essay".to_string(),
                    due_date: Utc::now(),
                },
                page: PageResult::new(vec![item.into()], page, 1),
            })
        }
    }

    async fn get(mock: RecordingList, uri: &str) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_assignment_submissions(mock)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .app_data(crate::shared::api::custom_query_config())
                .service(get_assignment_submissions_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", bearer_for(Uuid::new_v4(), Role::Teacher)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_list_includes_assignment_brief() {
        let recorder = RecordingList::default();
        let assignment_id = Uuid::new_v4();
        let uri = format!("/api/submissions/assignment/{}?status=late", assignment_id);
        let (status, body) = get(recorder.clone(), &uri).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["assignment"]["id"], assignment_id.to_string());
        assert_eq!(body["data"]["assignment"]["title"], "Essay");
        assert_eq!(body["data"]["submissions"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["pagination"]["total"], 1);
        assert_eq!(
            *recorder.seen_status.lock().unwrap(),
            Some(Some(SubmissionStatus::Late))
        );
    }

    #[actix_web::test]
    async fn test_non_owner_is_403() {
        let mock = RecordingList {
            deny: true,
            ..Default::default()
        };
        let uri = format!("/api/submissions/assignment/{}", Uuid::new_v4());
        let (status, _) = get(mock, &uri).await;
        assert_eq!(status, 403);
    }

    #[actix_web::test]
    async fn test_unknown_status_is_400() {
        let uri = format!("/api/submissions/assignment/{}?status=graded", Uuid::new_v4());
        let (status, body) = get(RecordingList::default(), &uri).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
