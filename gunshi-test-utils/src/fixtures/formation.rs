use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn formation<'a>(&'a mut self) -> FormationFixtures<'a> {
        FormationFixtures { setup: self }
    }
}

pub struct FormationFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> FormationFixtures<'a> {
    pub async fn insert_formation(
        &self,
        owner: &str,
        advisor: &str,
        label: &str,
    ) -> Result<entity::formation::Model, TestError> {
        Ok(
            entity::prelude::Formation::insert(factory::formation(owner, advisor, label))
                .exec_with_returning(&self.setup.state.db)
                .await?,
        )
    }

    /// Inserts one slot row; `position` is `leader`, `sub1` or `sub2`
    pub async fn insert_slot(
        &self,
        formation_id: i32,
        position: &str,
        officer_id: i32,
        inherit_skill_ids: (Option<i32>, Option<i32>),
    ) -> Result<entity::formation_slot::Model, TestError> {
        Ok(
            entity::prelude::FormationSlot::insert(entity::formation_slot::ActiveModel {
                formation_id: ActiveValue::Set(formation_id),
                position: ActiveValue::Set(position.to_string()),
                officer_id: ActiveValue::Set(officer_id),
                inherit_skill1_id: ActiveValue::Set(inherit_skill_ids.0),
                inherit_skill2_id: ActiveValue::Set(inherit_skill_ids.1),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Inserts `count` formations labelled `編成1` onwards for the pair
    pub async fn insert_labels(
        &self,
        owner: &str,
        advisor: &str,
        count: u32,
    ) -> Result<Vec<entity::formation::Model>, TestError> {
        let mut models = Vec::with_capacity(count as usize);
        for index in 1..=count {
            models.push(
                self.insert_formation(owner, advisor, &format!("編成{index}"))
                    .await?,
            );
        }

        Ok(models)
    }
}
