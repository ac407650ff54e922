use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, warn};

use crate::assignment::application::domain::entities::AssignmentDraft;
use crate::assignment::application::ports::incoming::use_cases::CreateAssignmentError;
use crate::auth::adapter::incoming::web::extractors::{access_denied_response, AuthenticatedUser};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub instructions: Option<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl From<CreateAssignmentRequest> for AssignmentDraft {
    fn from(req: CreateAssignmentRequest) -> Self {
        AssignmentDraft {
            title: req.title,
            description: req.description,
            due_date: req.due_date,
            instructions: req.instructions,
            attachments: req.attachments,
        }
    }
}

#[post("/api/assignments")]
pub async fn create_assignment_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreateAssignmentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .assignment
        .create
        .execute(user.caller(), payload.into_inner().into())
        .await
    {
        Ok(view) => ApiResponse::created_with_message(view, "Assignment created successfully"),

        Err(CreateAssignmentError::Invalid(e)) => {
            warn!(user_id = %user.user_id, error = %e, "Rejected assignment draft");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(CreateAssignmentError::Denied(denied)) => access_denied_response(denied),

        Err(CreateAssignmentError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to create assignment");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::application::domain::entities::{
        AssignmentValidationError, AssignmentView,
    };
    use crate::assignment::application::ports::incoming::use_cases::CreateAssignmentUseCase;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::domain::policy::{authorize, Action, Caller};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use crate::tests::support::fixtures::sample_assignment;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Duration;
    use serde_json::json;
    use uuid::Uuid;

    /// Applies the real policy and validation, then echoes the draft back.
    #[derive(Clone)]
    struct EchoCreate;

    #[async_trait]
    impl CreateAssignmentUseCase for EchoCreate {
        async fn execute(
            &self,
            caller: Caller,
            draft: AssignmentDraft,
        ) -> Result<AssignmentView, CreateAssignmentError> {
            authorize(Some(&caller), Action::CreateAssignment)?;
            let valid = draft.validate(Utc::now())?;
            let mut assignment = sample_assignment(caller.user_id);
            assignment.title = valid.title;
            assignment.due_date = valid.due_date;
            Ok(assignment.into())
        }
    }

    async fn post(role: Role, body: serde_json::Value) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_assignment(EchoCreate)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .app_data(crate::shared::api::custom_json_config())
                .service(create_assignment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/assignments")
            .insert_header(("Authorization", bearer_for(Uuid::new_v4(), role)))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    fn body(due: DateTime<Utc>) -> serde_json::Value {
        json!({
            "title": "  Essay  ",
            "description": "Write about ownership",
            "dueDate": due,
            "attachments": ["brief.pdf"]
        })
    }

    #[actix_web::test]
    async fn test_teacher_creates_assignment() {
        let (status, body) = post(Role::Teacher, body(Utc::now() + Duration::days(1))).await;
        assert_eq!(status, 201);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["title"], "Essay");
        assert_eq!(body["data"]["isActive"], true);
        assert_eq!(body["message"], "Assignment created successfully");
    }

    #[actix_web::test]
    async fn test_student_is_forbidden() {
        let (status, body) = post(Role::Student, body(Utc::now() + Duration::days(1))).await;
        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }

    #[actix_web::test]
    async fn test_past_due_date_is_400() {
        let (status, body) = post(Role::Teacher, body(Utc::now() - Duration::hours(1))).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            AssignmentValidationError::DueDateNotInFuture.to_string()
        );
    }

    #[actix_web::test]
    async fn test_missing_fields_are_400() {
        let (status, body) = post(Role::Teacher, json!({ "title": "Essay" })).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_missing_token_is_401() {
        let app_state = TestAppStateBuilder::default()
            .with_create_assignment(EchoCreate)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_assignment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/assignments")
            .set_json(body(Utc::now() + Duration::days(1)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
