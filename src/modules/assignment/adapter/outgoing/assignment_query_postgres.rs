use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::assignments::{Column, Entity, Model};
use crate::assignment::application::domain::entities::{Assignment, AssignmentView, DueWindow};
use crate::assignment::application::ports::outgoing::{
    AssignmentListFilter, AssignmentQuery, AssignmentQueryError,
};
use crate::auth::adapter::outgoing::user_summaries::load_user_summaries;
use crate::shared::db::contains_pattern;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone, Debug)]
pub struct AssignmentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AssignmentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Attaches creator summaries, one users query per batch.
    async fn with_creators(
        &self,
        assignments: Vec<Assignment>,
    ) -> Result<Vec<AssignmentView>, AssignmentQueryError> {
        let creators = load_user_summaries(
            &*self.db,
            assignments.iter().map(|a| a.created_by.value()),
        )
        .await
        .map_err(map_db_err)?;

        Ok(assignments
            .into_iter()
            .map(|assignment| {
                let creator = creators.get(&assignment.created_by.value()).cloned();
                AssignmentView {
                    assignment,
                    creator,
                }
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> AssignmentQueryError {
    AssignmentQueryError::DatabaseError(e.to_string())
}

fn to_domain(model: Model) -> Result<Assignment, AssignmentQueryError> {
    let id = model.id;
    model
        .into_domain()
        .map_err(|e| AssignmentQueryError::CorruptRecord(format!("assignment {}: {}", id, e)))
}

fn apply_filter(
    mut query: sea_orm::Select<Entity>,
    filter: &AssignmentListFilter,
) -> sea_orm::Select<Entity> {
    if !filter.include_inactive {
        query = query.filter(Column::IsActive.eq(true));
    }

    if let Some(owner) = filter.created_by {
        query = query.filter(Column::CreatedBy.eq(owner.value()));
    }

    if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let pattern = contains_pattern(search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(&pattern))
                .add(Expr::col(Column::Description).ilike(&pattern)),
        );
    }

    match filter.due {
        Some(DueWindow::Active) => query.filter(Column::DueDate.gte(filter.now.fixed_offset())),
        Some(DueWindow::Overdue) => query.filter(Column::DueDate.lt(filter.now.fixed_offset())),
        None => query,
    }
}

#[async_trait]
impl AssignmentQuery for AssignmentQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, AssignmentQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_domain)
            .transpose()
    }

    async fn view_by_id(&self, id: Uuid) -> Result<Option<AssignmentView>, AssignmentQueryError> {
        let Some(assignment) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.with_creators(vec![assignment]).await?.pop())
    }

    async fn list(
        &self,
        filter: AssignmentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<AssignmentView>, AssignmentQueryError> {
        let query = apply_filter(Entity::find(), &filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .order_by_desc(Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let assignments = models
            .into_iter()
            .map(to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(
            self.with_creators(assignments).await?,
            page,
            total,
        ))
    }
}
