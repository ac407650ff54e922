use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User, UserId, UserSummary};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub last_login: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "teacher")]
    Teacher,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Student => UserRole::Student,
            Role::Teacher => UserRole::Teacher,
            Role::Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for Role {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Student => Role::Student,
            UserRole::Teacher => Role::Teacher,
            UserRole::Admin => Role::Admin,
        }
    }
}

impl Model {
    pub fn into_domain(self) -> User {
        User {
            id: UserId::from(self.id),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role.into(),
            is_active: self.is_active,
            last_login: self.last_login.map(|at| at.with_timezone(&chrono::Utc)),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }

    pub fn into_summary(self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;

        if let ActiveValue::Set(email) = &self.email {
            self.email = Set(email.trim().to_lowercase());
        }

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
