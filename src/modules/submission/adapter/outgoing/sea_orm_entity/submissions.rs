use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::db::string_list;
use crate::submission::application::domain::entities::{Submission, SubmissionStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: Uuid,
    pub status: DbSubmissionStatus,
    pub submitted_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "JsonBinary")]
    pub files: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub text: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DbSubmissionStatus {
    #[sea_orm(string_value = "submitted")]
    Submitted,
    #[sea_orm(string_value = "late")]
    Late,
}

impl From<SubmissionStatus> for DbSubmissionStatus {
    fn from(status: SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::Submitted => DbSubmissionStatus::Submitted,
            SubmissionStatus::Late => DbSubmissionStatus::Late,
        }
    }
}

impl From<DbSubmissionStatus> for SubmissionStatus {
    fn from(status: DbSubmissionStatus) -> Self {
        match status {
            DbSubmissionStatus::Submitted => SubmissionStatus::Submitted,
            DbSubmissionStatus::Late => SubmissionStatus::Late,
        }
    }
}

impl Model {
    pub fn into_domain(self) -> Result<Submission, serde_json::Error> {
        Ok(Submission {
            files: string_list(&self.files)?,
            id: self.id,
            assignment_id: self.assignment_id,
            student_id: UserId::from(self.student_id),
            status: self.status.into(),
            submitted_at: self.submitted_at.with_timezone(&chrono::Utc),
            text: self.text,
            feedback: self.feedback,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::assignment::adapter::outgoing::sea_orm_entity::assignments::Entity",
        from = "Column::AssignmentId",
        to = "crate::assignment::adapter::outgoing::sea_orm_entity::assignments::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Assignment,
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::StudentId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<crate::assignment::adapter::outgoing::sea_orm_entity::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
