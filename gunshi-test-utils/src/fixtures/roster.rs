use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn roster<'a>(&'a mut self) -> RosterFixtures<'a> {
        RosterFixtures { setup: self }
    }
}

pub struct RosterFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> RosterFixtures<'a> {
    pub async fn insert_officer(
        &self,
        id: i32,
        name: &str,
        rarity: i32,
        cost: Option<i32>,
    ) -> Result<entity::officer::Model, TestError> {
        Ok(
            entity::prelude::Officer::insert(factory::officer(id, name, rarity, cost))
                .exec_with_returning(&self.setup.state.db)
                .await?,
        )
    }

    pub async fn insert_skill(
        &self,
        id: i32,
        name: &str,
        inherit1_name: Option<&str>,
        inherit2_name: Option<&str>,
    ) -> Result<entity::skill::Model, TestError> {
        Ok(
            entity::prelude::Skill::insert(factory::skill(id, name, inherit1_name, inherit2_name))
                .exec_with_returning(&self.setup.state.db)
                .await?,
        )
    }

    pub async fn insert_exclusive_skill(
        &self,
        id: i32,
        name: &str,
        owner_name: &str,
    ) -> Result<entity::skill::Model, TestError> {
        Ok(
            entity::prelude::Skill::insert(factory::exclusive_skill(id, name, owner_name))
                .exec_with_returning(&self.setup.state.db)
                .await?,
        )
    }

    /// Records `count` copies of an officer for `user_key`
    pub async fn own_officer(
        &self,
        user_key: &str,
        officer_id: i32,
        count: i32,
    ) -> Result<entity::user_officer::Model, TestError> {
        Ok(
            entity::prelude::UserOfficer::insert(entity::user_officer::ActiveModel {
                user_key: ActiveValue::Set(user_key.to_string()),
                officer_id: ActiveValue::Set(officer_id),
                count: ActiveValue::Set(count),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn own_skill(
        &self,
        user_key: &str,
        skill_id: i32,
        count: i32,
    ) -> Result<entity::user_skill::Model, TestError> {
        Ok(
            entity::prelude::UserSkill::insert(entity::user_skill::ActiveModel {
                user_key: ActiveValue::Set(user_key.to_string()),
                skill_id: ActiveValue::Set(skill_id),
                count: ActiveValue::Set(count),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
