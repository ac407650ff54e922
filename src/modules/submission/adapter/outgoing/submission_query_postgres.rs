use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::submissions::{Column, DbSubmissionStatus, Entity, Model};
use crate::assignment::adapter::outgoing::sea_orm_entity::assignments;
use crate::auth::adapter::outgoing::user_summaries::load_user_summaries;
use crate::auth::application::domain::entities::UserId;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::submission::application::domain::entities::{
    AssignmentBrief, Submission, SubmissionView,
};
use crate::submission::application::ports::outgoing::{
    SubmissionListFilter, SubmissionQuery, SubmissionQueryError,
};

#[derive(Clone, Debug)]
pub struct SubmissionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubmissionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn assignment_briefs(
        &self,
        ids: BTreeSet<Uuid>,
    ) -> Result<HashMap<Uuid, AssignmentBrief>, SubmissionQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = assignments::Entity::find()
            .filter(assignments::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|a| {
                (
                    a.id,
                    AssignmentBrief {
                        id: a.id,
                        title: a.title,
                        due_date: a.due_date.with_timezone(&chrono::Utc),
                    },
                )
            })
            .collect())
    }

    /// Joins assignment briefs and student summaries in two batched queries.
    async fn into_views(
        &self,
        submissions: Vec<Submission>,
    ) -> Result<Vec<SubmissionView>, SubmissionQueryError> {
        let briefs = self
            .assignment_briefs(submissions.iter().map(|s| s.assignment_id).collect())
            .await?;
        let students = load_user_summaries(
            &*self.db,
            submissions.iter().map(|s| s.student_id.value()),
        )
        .await
        .map_err(map_db_err)?;

        Ok(submissions
            .into_iter()
            .map(|submission| SubmissionView {
                assignment: briefs.get(&submission.assignment_id).cloned(),
                student: students.get(&submission.student_id.value()).cloned(),
                submission,
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> SubmissionQueryError {
    SubmissionQueryError::DatabaseError(e.to_string())
}

fn to_domain(model: Model) -> Result<Submission, SubmissionQueryError> {
    let id = model.id;
    model
        .into_domain()
        .map_err(|e| SubmissionQueryError::CorruptRecord(format!("submission {}: {}", id, e)))
}

#[async_trait]
impl SubmissionQuery for SubmissionQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, SubmissionQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_domain)
            .transpose()
    }

    async fn exists_for(
        &self,
        assignment_id: Uuid,
        student_id: UserId,
    ) -> Result<bool, SubmissionQueryError> {
        let count = Entity::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id.value()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn view_by_id(&self, id: Uuid) -> Result<Option<SubmissionView>, SubmissionQueryError> {
        let Some(submission) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.into_views(vec![submission]).await?.pop())
    }

    async fn list(
        &self,
        filter: SubmissionListFilter,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionView>, SubmissionQueryError> {
        let mut query = Entity::find();

        if let Some(assignment_id) = filter.assignment_id {
            query = query.filter(Column::AssignmentId.eq(assignment_id));
        }
        if let Some(student_id) = filter.student_id {
            query = query.filter(Column::StudentId.eq(student_id.value()));
        }
        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(DbSubmissionStatus::from(status)));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .order_by_desc(Column::SubmittedAt)
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let submissions = models
            .into_iter()
            .map(to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(self.into_views(submissions).await?, page, total))
    }
}
