use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::db::{FormationModel, FormationSlotModel},
    service::formation::sync::{FormationHeader, FormationStore, SlotRow},
};

pub struct FormationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FormationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_key(
        &self,
        owner_key: &str,
        advisor_key: &str,
        label: &str,
    ) -> Result<Option<FormationModel>, DbErr> {
        entity::prelude::Formation::find()
            .filter(entity::formation::Column::OwnerKey.eq(owner_key))
            .filter(entity::formation::Column::AdvisorKey.eq(advisor_key))
            .filter(entity::formation::Column::Label.eq(label))
            .one(self.db)
            .await
    }

    pub async fn get_slots(&self, formation_id: i32) -> Result<Vec<FormationSlotModel>, DbErr> {
        entity::prelude::FormationSlot::find()
            .filter(entity::formation_slot::Column::FormationId.eq(formation_id))
            .order_by_asc(entity::formation_slot::Column::Id)
            .all(self.db)
            .await
    }

    /// (advisor_key, label) of every formation written for `owner_key`
    pub async fn get_labels_for_owner(
        &self,
        owner_key: &str,
    ) -> Result<Vec<(String, String)>, DbErr> {
        entity::prelude::Formation::find()
            .select_only()
            .column(entity::formation::Column::AdvisorKey)
            .column(entity::formation::Column::Label)
            .filter(entity::formation::Column::OwnerKey.eq(owner_key))
            .into_tuple::<(String, String)>()
            .all(self.db)
            .await
    }

    /// Labels `advisor_key` wrote for `owner_key`
    pub async fn get_labels(&self, owner_key: &str, advisor_key: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::Formation::find()
            .select_only()
            .column(entity::formation::Column::Label)
            .filter(entity::formation::Column::OwnerKey.eq(owner_key))
            .filter(entity::formation::Column::AdvisorKey.eq(advisor_key))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Every identity that appears as owner or advisor of a formation
    pub async fn get_user_keys(&self) -> Result<Vec<String>, DbErr> {
        let pairs = entity::prelude::Formation::find()
            .select_only()
            .column(entity::formation::Column::OwnerKey)
            .column(entity::formation::Column::AdvisorKey)
            .into_tuple::<(String, String)>()
            .all(self.db)
            .await?;

        Ok(pairs
            .into_iter()
            .flat_map(|(owner, advisor)| [owner, advisor])
            .collect())
    }

    /// Header matching `header.id` within the same owner/advisor pair, else the one
    /// matching the natural key
    async fn find_existing(&self, header: &FormationHeader) -> Result<Option<FormationModel>, DbErr> {
        if let Some(id) = header.id {
            let by_id = entity::prelude::Formation::find_by_id(id)
                .filter(entity::formation::Column::OwnerKey.eq(header.owner_key.as_str()))
                .filter(entity::formation::Column::AdvisorKey.eq(header.advisor_key.as_str()))
                .filter(entity::formation::Column::Label.eq(header.label.as_str()))
                .one(self.db)
                .await?;

            if by_id.is_some() {
                return Ok(by_id);
            }
        }

        self.find_by_key(&header.owner_key, &header.advisor_key, &header.label)
            .await
    }
}

impl<'a, C: ConnectionTrait> FormationStore for FormationRepository<'a, C> {
    async fn upsert_header(&self, header: &FormationHeader) -> Result<i32, DbErr> {
        let now = Utc::now().naive_utc();

        if let Some(existing) = self.find_existing(header).await? {
            let mut formation = existing.into_active_model();
            formation.request_comment = ActiveValue::Set(header.request_comment.clone());
            formation.answer_comment = ActiveValue::Set(header.answer_comment.clone());
            formation.updated_at = ActiveValue::Set(now);

            return Ok(formation.update(self.db).await?.id);
        }

        let formation = entity::formation::ActiveModel {
            owner_key: ActiveValue::Set(header.owner_key.clone()),
            advisor_key: ActiveValue::Set(header.advisor_key.clone()),
            label: ActiveValue::Set(header.label.clone()),
            request_comment: ActiveValue::Set(header.request_comment.clone()),
            answer_comment: ActiveValue::Set(header.answer_comment.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(formation.insert(self.db).await?.id)
    }

    async fn delete_slots(&self, formation_id: i32) -> Result<(), DbErr> {
        entity::prelude::FormationSlot::delete_many()
            .filter(entity::formation_slot::Column::FormationId.eq(formation_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn insert_slots(&self, formation_id: i32, rows: &[SlotRow]) -> Result<(), DbErr> {
        if rows.is_empty() {
            return Ok(());
        }

        let slots = rows.iter().map(|row| entity::formation_slot::ActiveModel {
            formation_id: ActiveValue::Set(formation_id),
            position: ActiveValue::Set(row.position.as_str().to_string()),
            officer_id: ActiveValue::Set(row.officer_id),
            inherit_skill1_id: ActiveValue::Set(row.inherit_skill1_id),
            inherit_skill2_id: ActiveValue::Set(row.inherit_skill2_id),
            ..Default::default()
        });

        entity::prelude::FormationSlot::insert_many(slots)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gunshi_test_utils::prelude::*;

    use super::*;
    use crate::model::formation::SlotPosition;

    fn header(id: Option<i32>, label: &str) -> FormationHeader {
        FormationHeader {
            id,
            owner_key: "alice".to_string(),
            advisor_key: "bob".to_string(),
            label: label.to_string(),
            request_comment: Some("help".to_string()),
            answer_comment: None,
        }
    }

    mod upsert_header {
        use super::*;

        /// Expect a new header when nothing matches the natural key
        #[tokio::test]
        async fn inserts_new_header() -> Result<(), TestError> {
            let test = test_setup_with_roster_tables!()?;
            let repo = FormationRepository::new(&test.state.db);

            let id = repo.upsert_header(&header(None, "編成1")).await?;

            let stored = repo.find_by_key("alice", "bob", "編成1").await?.unwrap();
            assert_eq!(stored.id, id);
            assert_eq!(stored.request_comment.as_deref(), Some("help"));

            Ok(())
        }

        /// Expect the natural key to find the existing header when no id is known
        #[tokio::test]
        async fn updates_by_natural_key() -> Result<(), TestError> {
            let mut test = test_setup_with_roster_tables!()?;
            let existing = test
                .formation()
                .insert_formation("alice", "bob", "編成1")
                .await?;
            let repo = FormationRepository::new(&test.state.db);

            let mut update = header(None, "編成1");
            update.answer_comment = Some("try cavalry".to_string());
            let id = repo.upsert_header(&update).await?;

            assert_eq!(id, existing.id);
            let stored = repo.find_by_key("alice", "bob", "編成1").await?.unwrap();
            assert_eq!(stored.answer_comment.as_deref(), Some("try cavalry"));
            assert_eq!(repo.get_labels("alice", "bob").await?.len(), 1);

            Ok(())
        }

        /// Expect an id belonging to another pair to be ignored
        #[tokio::test]
        async fn ignores_foreign_id() -> Result<(), TestError> {
            let mut test = test_setup_with_roster_tables!()?;
            let foreign = test
                .formation()
                .insert_formation("carol", "dave", "編成1")
                .await?;
            let repo = FormationRepository::new(&test.state.db);

            let id = repo.upsert_header(&header(Some(foreign.id), "編成1")).await?;

            assert_ne!(id, foreign.id);
            let untouched = repo.find_by_key("carol", "dave", "編成1").await?.unwrap();
            assert_eq!(untouched.request_comment, None);

            Ok(())
        }
    }

    /// Expect slots to be replaced rather than merged
    #[tokio::test]
    async fn delete_then_insert_replaces_slots() -> Result<(), TestError> {
        let mut test = test_setup_with_roster_tables!()?;
        let formation = test
            .formation()
            .insert_formation("alice", "bob", "編成1")
            .await?;
        test.formation()
            .insert_slot(formation.id, "sub2", 3, (None, None))
            .await?;
        let repo = FormationRepository::new(&test.state.db);

        repo.delete_slots(formation.id).await?;
        repo.insert_slots(
            formation.id,
            &[SlotRow {
                position: SlotPosition::Leader,
                officer_id: 1,
                inherit_skill1_id: Some(10),
                inherit_skill2_id: None,
            }],
        )
        .await?;

        let slots = repo.get_slots(formation.id).await?;
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].position, "leader");
        assert_eq!(slots[0].inherit_skill1_id, Some(10));

        Ok(())
    }

    #[tokio::test]
    async fn user_keys_include_owners_and_advisors() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_formation("alice", "bob", "編成1")
            .with_formation("alice", "carol", "編成1")
            .build()
            .await?;
        let repo = FormationRepository::new(&test.state.db);

        let mut keys = repo.get_user_keys().await?;
        keys.sort();
        keys.dedup();

        assert_eq!(keys, vec!["alice", "bob", "carol"]);

        Ok(())
    }
}
