use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct UserSkillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserSkillRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Ids of skills `user_key` owns, i.e. with a positive count
    pub async fn get_owned_ids(&self, user_key: &str) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserSkill::find()
            .select_only()
            .column(entity::user_skill::Column::SkillId)
            .filter(entity::user_skill::Column::UserKey.eq(user_key))
            .filter(entity::user_skill::Column::Count.gt(0))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Writes counts for `user_key`, overwriting existing rows by (user_key, skill_id)
    pub async fn upsert_many(&self, user_key: &str, counts: &[(i32, i32)]) -> Result<(), DbErr> {
        if counts.is_empty() {
            return Ok(());
        }

        let rows = counts
            .iter()
            .map(|(skill_id, count)| entity::user_skill::ActiveModel {
                user_key: ActiveValue::Set(user_key.to_string()),
                skill_id: ActiveValue::Set(*skill_id),
                count: ActiveValue::Set(*count),
            });

        entity::prelude::UserSkill::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    entity::user_skill::Column::UserKey,
                    entity::user_skill::Column::SkillId,
                ])
                .update_columns([entity::user_skill::Column::Count])
                .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Distinct user keys with at least one skill row, sorted
    pub async fn get_user_keys(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::UserSkill::find()
            .select_only()
            .column(entity::user_skill::Column::UserKey)
            .distinct()
            .order_by_asc(entity::user_skill::Column::UserKey)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use gunshi_test_utils::prelude::*;

    use super::*;

    /// Expect toggled-off skills to stay recorded with a zero count but not be owned
    #[tokio::test]
    async fn owned_ids_follow_upserted_counts() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_skill(1, "Kachidoki", Some("Nobunaga"), None)
            .with_skill(2, "Teppo", None, Some("Ieyasu"))
            .with_owned_skill("alice", 1, 1)
            .build()
            .await?;

        let repo = UserSkillRepository::new(&test.state.db);
        repo.upsert_many("alice", &[(1, 0), (2, 1)]).await?;

        assert_eq!(repo.get_owned_ids("alice").await?, vec![2]);
        assert_eq!(repo.get_user_keys().await?, vec!["alice"]);

        Ok(())
    }
}
