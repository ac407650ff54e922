use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Select,
};
use std::sync::Arc;

use crate::admin::application::domain::entities::{
    AssignmentStats, NotificationStats, SubmissionStats, SystemStats, UserActivityCounts,
    UserStats,
};
use crate::admin::application::ports::outgoing::{AdminStatsQuery, AdminStatsQueryError};
use crate::assignment::adapter::outgoing::sea_orm_entity::assignments::{
    Column as AssignmentColumn, Entity as AssignmentEntity,
};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, UserRole,
};
use crate::auth::application::domain::entities::UserId;
use crate::notification::adapter::outgoing::sea_orm_entity::notifications::{
    Column as NotificationColumn, Entity as NotificationEntity,
};
use crate::submission::adapter::outgoing::sea_orm_entity::submissions::{
    Column as SubmissionColumn, DbSubmissionStatus, Entity as SubmissionEntity,
};

const RECENT_DAYS: i64 = 7;
const ACTIVE_USER_DAYS: i64 = 30;

#[derive(Clone, Debug)]
pub struct AdminStatsPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminStatsPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn count<E>(&self, select: Select<E>) -> Result<u64, AdminStatsQueryError>
    where
        E: EntityTrait,
        E::Model: Send + Sync + 'static,
    {
        select.count(&*self.db).await.map_err(map_db_err)
    }

    async fn user_stats(&self, now: DateTime<Utc>) -> Result<UserStats, AdminStatsQueryError> {
        let recent = now - Duration::days(RECENT_DAYS);
        let active_since = now - Duration::days(ACTIVE_USER_DAYS);
        let by_role = |role: UserRole| UserEntity::find().filter(UserColumn::Role.eq(role));

        Ok(UserStats {
            total: self.count(UserEntity::find()).await?,
            students: self.count(by_role(UserRole::Student)).await?,
            teachers: self.count(by_role(UserRole::Teacher)).await?,
            admins: self.count(by_role(UserRole::Admin)).await?,
            active: self
                .count(UserEntity::find().filter(UserColumn::IsActive.eq(true)))
                .await?,
            recent: self
                .count(UserEntity::find().filter(UserColumn::CreatedAt.gte(recent)))
                .await?,
            active_last_30_days: self
                .count(UserEntity::find().filter(UserColumn::LastLogin.gte(active_since)))
                .await?,
        })
    }

    async fn assignment_stats(
        &self,
        now: DateTime<Utc>,
    ) -> Result<AssignmentStats, AdminStatsQueryError> {
        let recent = now - Duration::days(RECENT_DAYS);
        let live = || AssignmentEntity::find().filter(AssignmentColumn::IsActive.eq(true));

        Ok(AssignmentStats {
            total: self.count(AssignmentEntity::find()).await?,
            active: self
                .count(live().filter(AssignmentColumn::DueDate.gte(now)))
                .await?,
            overdue: self
                .count(live().filter(AssignmentColumn::DueDate.lt(now)))
                .await?,
            recent: self
                .count(AssignmentEntity::find().filter(AssignmentColumn::CreatedAt.gte(recent)))
                .await?,
        })
    }

    async fn submission_stats(
        &self,
        now: DateTime<Utc>,
    ) -> Result<SubmissionStats, AdminStatsQueryError> {
        let recent = now - Duration::days(RECENT_DAYS);

        Ok(SubmissionStats {
            total: self.count(SubmissionEntity::find()).await?,
            late: self
                .count(
                    SubmissionEntity::find()
                        .filter(SubmissionColumn::Status.eq(DbSubmissionStatus::Late)),
                )
                .await?,
            recent: self
                .count(SubmissionEntity::find().filter(SubmissionColumn::SubmittedAt.gte(recent)))
                .await?,
        })
    }

    async fn notification_stats(&self) -> Result<NotificationStats, AdminStatsQueryError> {
        Ok(NotificationStats {
            total: self.count(NotificationEntity::find()).await?,
            unread: self
                .count(NotificationEntity::find().filter(NotificationColumn::Read.eq(false)))
                .await?,
        })
    }
}

fn map_db_err(e: DbErr) -> AdminStatsQueryError {
    AdminStatsQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl AdminStatsQuery for AdminStatsPostgres {
    async fn system_stats(&self, now: DateTime<Utc>) -> Result<SystemStats, AdminStatsQueryError> {
        Ok(SystemStats {
            users: self.user_stats(now).await?,
            assignments: self.assignment_stats(now).await?,
            submissions: self.submission_stats(now).await?,
            notifications: self.notification_stats().await?,
        })
    }

    async fn user_activity_counts(
        &self,
        user_id: UserId,
    ) -> Result<UserActivityCounts, AdminStatsQueryError> {
        let id = user_id.value();

        Ok(UserActivityCounts {
            assignments: self
                .count(AssignmentEntity::find().filter(AssignmentColumn::CreatedBy.eq(id)))
                .await?,
            submissions: self
                .count(SubmissionEntity::find().filter(SubmissionColumn::StudentId.eq(id)))
                .await?,
        })
    }
}
