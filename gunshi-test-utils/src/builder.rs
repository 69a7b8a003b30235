//! Declarative test builder.
//!
//! Tables and fixture rows are queued on the builder and created in dependency order by
//! `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_roster_tables: bool,

    officers: Vec<(i32, String, i32, Option<i32>)>, // (id, name, rarity, cost)
    skills: Vec<(i32, String, Option<String>, Option<String>)>, // (id, name, inherit1, inherit2)
    owned_officers: Vec<(String, i32, i32)>,        // (user_key, officer_id, count)
    owned_skills: Vec<(String, i32, i32)>,          // (user_key, skill_id, count)
    formations: Vec<(String, String, String)>,      // (owner, advisor, label)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_roster_tables: false,
            officers: Vec::new(),
            skills: Vec::new(),
            owned_officers: Vec::new(),
            owned_skills: Vec::new(),
            formations: Vec::new(),
        }
    }

    /// Add the catalog, ownership and formation tables.
    pub fn with_roster_tables(mut self) -> Self {
        self.include_roster_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use gunshi_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), gunshi_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Officer)
    ///     .with_table(UserOfficer)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub fn with_officer(mut self, id: i32, name: &str, rarity: i32, cost: Option<i32>) -> Self {
        self.officers.push((id, name.to_string(), rarity, cost));
        self
    }

    pub fn with_skill(
        mut self,
        id: i32,
        name: &str,
        inherit1_name: Option<&str>,
        inherit2_name: Option<&str>,
    ) -> Self {
        self.skills.push((
            id,
            name.to_string(),
            inherit1_name.map(str::to_string),
            inherit2_name.map(str::to_string),
        ));
        self
    }

    /// Record ownership of an officer, the officer must be added with `with_officer`.
    pub fn with_owned_officer(mut self, user_key: &str, officer_id: i32, count: i32) -> Self {
        self.owned_officers
            .push((user_key.to_string(), officer_id, count));
        self
    }

    pub fn with_owned_skill(mut self, user_key: &str, skill_id: i32, count: i32) -> Self {
        self.owned_skills.push((user_key.to_string(), skill_id, count));
        self
    }

    /// Insert an empty formation header.
    pub fn with_formation(mut self, owner: &str, advisor: &str, label: &str) -> Self {
        self.formations
            .push((owner.to_string(), advisor.to_string(), label.to_string()));
        self
    }

    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Create tables
        let mut tables = Vec::new();
        if self.include_roster_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::Officer));
            tables.push(schema.create_table_from_entity(entity::prelude::Skill));
            tables.push(schema.create_table_from_entity(entity::prelude::UserOfficer));
            tables.push(schema.create_table_from_entity(entity::prelude::UserSkill));
            tables.push(schema.create_table_from_entity(entity::prelude::Formation));
            tables.push(schema.create_table_from_entity(entity::prelude::FormationSlot));
        }
        tables.extend(self.tables);
        setup.with_tables(tables).await?;

        // 2. Insert fixtures, catalog rows first
        for (id, name, rarity, cost) in self.officers {
            setup.roster().insert_officer(id, &name, rarity, cost).await?;
        }

        for (id, name, inherit1, inherit2) in self.skills {
            setup
                .roster()
                .insert_skill(id, &name, inherit1.as_deref(), inherit2.as_deref())
                .await?;
        }

        for (user_key, officer_id, count) in self.owned_officers {
            setup.roster().own_officer(&user_key, officer_id, count).await?;
        }

        for (user_key, skill_id, count) in self.owned_skills {
            setup.roster().own_skill(&user_key, skill_id, count).await?;
        }

        for (owner, advisor, label) in self.formations {
            setup
                .formation()
                .insert_formation(&owner, &advisor, &label)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
