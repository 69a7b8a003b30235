use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::OfficerModel;

pub struct OfficerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OfficerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every officer, highest rarity first
    pub async fn get_all(&self) -> Result<Vec<OfficerModel>, DbErr> {
        entity::prelude::Officer::find()
            .order_by_desc(entity::officer::Column::Rarity)
            .order_by_asc(entity::officer::Column::Name)
            .all(self.db)
            .await
    }

    /// Officers `user_key` holds at least one copy of, rarity descending then name ascending
    pub async fn get_owned_by(&self, user_key: &str) -> Result<Vec<OfficerModel>, DbErr> {
        entity::prelude::Officer::find()
            .inner_join(entity::user_officer::Entity)
            .filter(entity::user_officer::Column::UserKey.eq(user_key))
            .filter(entity::user_officer::Column::Count.gt(0))
            .order_by_desc(entity::officer::Column::Rarity)
            .order_by_asc(entity::officer::Column::Name)
            .all(self.db)
            .await
    }

    /// Ids among `officer_ids` that exist in the catalog
    pub async fn get_existing_ids(&self, officer_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Officer::find()
            .filter(entity::officer::Column::Id.is_in(officer_ids.iter().copied()))
            .all(self.db)
            .await
            .map(|officers| officers.into_iter().map(|o| o.id).collect())
    }
}
