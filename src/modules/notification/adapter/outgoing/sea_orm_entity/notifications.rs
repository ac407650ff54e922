use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::notification::application::domain::entities::{
    Notification, NotificationKind, RelatedType,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub kind: DbNotificationKind,
    pub read: bool,
    pub related_id: Option<Uuid>,
    pub related_type: Option<DbRelatedType>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DbNotificationKind {
    #[sea_orm(string_value = "assignment")]
    Assignment,
    #[sea_orm(string_value = "deadline")]
    Deadline,
    #[sea_orm(string_value = "system")]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DbRelatedType {
    #[sea_orm(string_value = "assignment")]
    Assignment,
    #[sea_orm(string_value = "submission")]
    Submission,
}

impl From<NotificationKind> for DbNotificationKind {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Assignment => DbNotificationKind::Assignment,
            NotificationKind::Deadline => DbNotificationKind::Deadline,
            NotificationKind::System => DbNotificationKind::System,
        }
    }
}

impl From<DbNotificationKind> for NotificationKind {
    fn from(kind: DbNotificationKind) -> Self {
        match kind {
            DbNotificationKind::Assignment => NotificationKind::Assignment,
            DbNotificationKind::Deadline => NotificationKind::Deadline,
            DbNotificationKind::System => NotificationKind::System,
        }
    }
}

impl From<RelatedType> for DbRelatedType {
    fn from(related: RelatedType) -> Self {
        match related {
            RelatedType::Assignment => DbRelatedType::Assignment,
            RelatedType::Submission => DbRelatedType::Submission,
        }
    }
}

impl From<DbRelatedType> for RelatedType {
    fn from(related: DbRelatedType) -> Self {
        match related {
            DbRelatedType::Assignment => RelatedType::Assignment,
            DbRelatedType::Submission => RelatedType::Submission,
        }
    }
}

impl Model {
    pub fn into_domain(self) -> Notification {
        Notification {
            id: self.id,
            user_id: UserId::from(self.user_id),
            title: self.title,
            message: self.message,
            kind: self.kind.into(),
            read: self.read,
            related_id: self.related_id,
            related_type: self.related_type.map(RelatedType::from),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
