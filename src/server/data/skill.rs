use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::SkillModel;

pub struct SkillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SkillRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Skills without an owner officer, ordered by name
    pub async fn get_general(&self) -> Result<Vec<SkillModel>, DbErr> {
        entity::prelude::Skill::find()
            .filter(entity::skill::Column::OwnerName.is_null())
            .order_by_asc(entity::skill::Column::Name)
            .all(self.db)
            .await
    }

    /// Ids among `skill_ids` that are general skills
    pub async fn get_general_ids(&self, skill_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Skill::find()
            .filter(entity::skill::Column::Id.is_in(skill_ids.iter().copied()))
            .filter(entity::skill::Column::OwnerName.is_null())
            .all(self.db)
            .await
            .map(|skills| skills.into_iter().map(|s| s.id).collect())
    }
}
