use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct UserOfficerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserOfficerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// (officer_id, count) for every officer row recorded for `user_key`
    pub async fn get_counts(&self, user_key: &str) -> Result<Vec<(i32, i32)>, DbErr> {
        entity::prelude::UserOfficer::find()
            .select_only()
            .column(entity::user_officer::Column::OfficerId)
            .column(entity::user_officer::Column::Count)
            .filter(entity::user_officer::Column::UserKey.eq(user_key))
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }

    /// Writes counts for `user_key`, overwriting existing rows by (user_key, officer_id)
    pub async fn upsert_many(&self, user_key: &str, counts: &[(i32, i32)]) -> Result<(), DbErr> {
        if counts.is_empty() {
            return Ok(());
        }

        let rows = counts
            .iter()
            .map(|(officer_id, count)| entity::user_officer::ActiveModel {
                user_key: ActiveValue::Set(user_key.to_string()),
                officer_id: ActiveValue::Set(*officer_id),
                count: ActiveValue::Set(*count),
            });

        entity::prelude::UserOfficer::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    entity::user_officer::Column::UserKey,
                    entity::user_officer::Column::OfficerId,
                ])
                .update_columns([entity::user_officer::Column::Count])
                .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Distinct user keys with at least one officer row, sorted
    pub async fn get_user_keys(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::UserOfficer::find()
            .select_only()
            .column(entity::user_officer::Column::UserKey)
            .distinct()
            .order_by_asc(entity::user_officer::Column::UserKey)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use gunshi_test_utils::prelude::*;

    use super::*;

    /// Expect existing rows to be overwritten and new rows inserted
    #[tokio::test]
    async fn upsert_many_overwrites_by_composite_key() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_officer(1, "Nobunaga", 5, Some(7))
            .with_officer(2, "Hideyoshi", 5, Some(6))
            .with_owned_officer("alice", 1, 3)
            .build()
            .await?;

        let repo = UserOfficerRepository::new(&test.state.db);
        repo.upsert_many("alice", &[(1, 0), (2, 2)]).await?;

        let mut counts = repo.get_counts("alice").await?;
        counts.sort();
        assert_eq!(counts, vec![(1, 0), (2, 2)]);

        Ok(())
    }

    #[tokio::test]
    async fn get_user_keys_is_distinct_and_sorted() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_officer(1, "Nobunaga", 5, Some(7))
            .with_officer(2, "Hideyoshi", 5, Some(6))
            .with_owned_officer("carol", 1, 1)
            .with_owned_officer("alice", 1, 1)
            .with_owned_officer("alice", 2, 0)
            .build()
            .await?;

        let repo = UserOfficerRepository::new(&test.state.db);

        assert_eq!(repo.get_user_keys().await?, vec!["alice", "carol"]);

        Ok(())
    }
}
