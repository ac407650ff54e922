use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use super::sea_orm_entity::users::{Column, Entity, Model};
use crate::auth::application::domain::entities::UserSummary;

/// Loads public summaries for a set of users in one round trip.
/// Ids without a row are simply absent from the map.
pub async fn load_user_summaries<C, I>(db: &C, ids: I) -> Result<HashMap<Uuid, UserSummary>, DbErr>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = Uuid>,
{
    let ids: BTreeSet<Uuid> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let users = Entity::find()
        .filter(Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(users
        .into_iter()
        .map(Model::into_summary)
        .map(|summary| (summary.id, summary))
        .collect())
}
