use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::assignment::application::domain::entities::Assignment;
use crate::auth::application::domain::entities::UserId;
use crate::shared::db::string_list;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTimeWithTimeZone,
    pub instructions: Option<String>,
    pub is_active: bool,
    pub created_by: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub attachments: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_domain(self) -> Result<Assignment, serde_json::Error> {
        Ok(Assignment {
            attachments: string_list(&self.attachments)?,
            id: self.id,
            title: self.title,
            description: self.description,
            due_date: self.due_date.with_timezone(&chrono::Utc),
            instructions: self.instructions,
            is_active: self.is_active,
            created_by: UserId::from(self.created_by),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::CreatedBy",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Creator,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
