//! Listings of known identities.

use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        formation::FormationRepository, user_officer::UserOfficerRepository,
        user_skill::UserSkillRepository,
    },
    error::Error,
};

pub struct DirectoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DirectoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Identities found in formations, officer ownership or skill ownership, sorted.
    ///
    /// `search` keeps names containing it, ignoring case.
    pub async fn get_users(&self, search: Option<&str>) -> Result<Vec<String>, Error> {
        let mut users: BTreeSet<String> = BTreeSet::new();
        users.extend(FormationRepository::new(self.db).get_user_keys().await?);
        users.extend(UserOfficerRepository::new(self.db).get_user_keys().await?);
        users.extend(UserSkillRepository::new(self.db).get_user_keys().await?);

        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        Ok(users
            .into_iter()
            .filter(|name| !name.trim().is_empty())
            .filter(|name| match &needle {
                Some(needle) => name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .collect())
    }

    /// Identities with at least one officer ownership row, sorted
    pub async fn get_owners(&self) -> Result<Vec<String>, Error> {
        Ok(UserOfficerRepository::new(self.db).get_user_keys().await?)
    }
}
