use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::sea_orm_entity::submissions::{ActiveModel, Column, Entity, Model};
use crate::shared::db::is_unique_violation;
use crate::submission::application::domain::entities::{
    NewSubmission, Submission, SubmissionRevision,
};
use crate::submission::application::ports::outgoing::{
    SubmissionRepository, SubmissionRepositoryError,
};

#[derive(Clone)]
pub struct SubmissionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubmissionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> SubmissionRepositoryError {
    SubmissionRepositoryError::DatabaseError(e.to_string())
}

fn to_json(files: &[String]) -> Result<serde_json::Value, SubmissionRepositoryError> {
    serde_json::to_value(files)
        .map_err(|e| SubmissionRepositoryError::SerializationError(e.to_string()))
}

fn first_row(rows: Vec<Model>) -> Result<Submission, SubmissionRepositoryError> {
    rows.into_iter()
        .next()
        .ok_or(SubmissionRepositoryError::NotFound)?
        .into_domain()
        .map_err(|e| SubmissionRepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl SubmissionRepository for SubmissionRepositoryPostgres {
    async fn create(
        &self,
        submission: NewSubmission,
    ) -> Result<Submission, SubmissionRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            assignment_id: Set(submission.assignment_id),
            student_id: Set(submission.student_id.value()),
            status: Set(submission.status.into()),
            submitted_at: Set(submission.submitted_at.fixed_offset()),
            files: Set(to_json(&submission.files)?),
            text: Set(submission.text),
            feedback: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match model.insert(&*self.db).await {
            Ok(inserted) => first_row(vec![inserted]),
            Err(e) if is_unique_violation(&e) => {
                warn!(
                    assignment_id = %submission.assignment_id,
                    student_id = %submission.student_id,
                    "Duplicate submission rejected by unique index"
                );
                Err(SubmissionRepositoryError::Duplicate)
            }
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn resubmit(
        &self,
        id: Uuid,
        revision: SubmissionRevision,
    ) -> Result<Submission, SubmissionRepositoryError> {
        let files = match revision.files.as_deref() {
            Some(files) => Set(to_json(files)?),
            None => NotSet,
        };
        let text = match revision.text {
            Some(text) => Set(Some(text)),
            None => NotSet,
        };

        let changes = ActiveModel {
            id: NotSet,
            assignment_id: NotSet,
            student_id: NotSet,
            status: Set(revision.status.into()),
            submitted_at: Set(revision.submitted_at.fixed_offset()),
            files,
            text,
            feedback: NotSet,
            created_at: NotSet,
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let rows = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        first_row(rows)
    }

    async fn set_feedback(
        &self,
        id: Uuid,
        feedback: String,
    ) -> Result<Submission, SubmissionRepositoryError> {
        let rows = Entity::update_many()
            .col_expr(Column::Feedback, Expr::value(feedback))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        first_row(rows)
    }
}
