//! Saving which officers and skills a member owns.

use std::collections::{BTreeMap, HashSet};

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        identity::Identity,
        roster::{OfficerCountDto, SkillOwnershipDto},
    },
    server::{
        data::{
            officer::OfficerRepository, skill::SkillRepository,
            user_officer::UserOfficerRepository, user_skill::UserSkillRepository,
        },
        error::Error,
    },
};

pub struct OwnershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnershipService<'a> {
    /// Creates a new instance of [`OwnershipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Overwrites `viewer`'s officer counts.
    ///
    /// # Behavior
    /// - Negative counts are stored as zero.
    /// - Ids missing from the catalog are skipped.
    /// - An id given more than once keeps its last count.
    ///
    /// # Arguments
    /// - `viewer` ([`Identity`]): Member whose counts are written
    /// - `counts` (`&[OfficerCountDto]`): Officer ids with the number of copies owned
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of distinct officers written
    /// - `Err(Error::DbErr(_))`: Database error while checking ids or upserting
    pub async fn save_officer_counts(
        &self,
        viewer: &Identity,
        counts: &[OfficerCountDto],
    ) -> Result<usize, Error> {
        let requested: Vec<i32> = counts.iter().map(|c| c.officer_id).collect();
        let known: HashSet<i32> = OfficerRepository::new(self.db)
            .get_existing_ids(&requested)
            .await?
            .into_iter()
            .collect();

        let rows = collapse_rows(
            counts
                .iter()
                .filter(|c| known.contains(&c.officer_id))
                .map(|c| (c.officer_id, c.count.max(0))),
        );

        if rows.len() < counts.len() {
            tracing::debug!(
                identity = %viewer,
                skipped = counts.len() - rows.len(),
                "Ignored repeated or unknown officer counts"
            );
        }

        UserOfficerRepository::new(self.db)
            .upsert_many(viewer.as_str(), &rows)
            .await?;

        Ok(rows.len())
    }

    /// Stores a count of 1 for owned and 0 for unowned general skills.
    ///
    /// Exclusive or unknown skill ids are ignored, repeated ids keep their last flag.
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of distinct skills written
    /// - `Err(Error::DbErr(_))`: Database error while checking ids or upserting
    pub async fn save_skill_ownership(
        &self,
        viewer: &Identity,
        ownership: &[SkillOwnershipDto],
    ) -> Result<usize, Error> {
        let requested: Vec<i32> = ownership.iter().map(|o| o.skill_id).collect();
        let general: HashSet<i32> = SkillRepository::new(self.db)
            .get_general_ids(&requested)
            .await?
            .into_iter()
            .collect();

        let rows = collapse_rows(
            ownership
                .iter()
                .filter(|o| general.contains(&o.skill_id))
                .map(|o| (o.skill_id, i32::from(o.owned))),
        );

        UserSkillRepository::new(self.db)
            .upsert_many(viewer.as_str(), &rows)
            .await?;

        Ok(rows.len())
    }
}

/// One `(id, count)` row per id, the last occurrence winning, sorted by id.
///
/// A single `INSERT ... ON CONFLICT DO UPDATE` may not touch the same row twice on
/// Postgres.
fn collapse_rows(rows: impl IntoIterator<Item = (i32, i32)>) -> Vec<(i32, i32)> {
    rows.into_iter()
        .collect::<BTreeMap<i32, i32>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use gunshi_test_utils::prelude::*;

    use super::*;

    /// Expect repeated ids to collapse into the last value given for them
    #[test]
    fn collapse_rows_keeps_last_value_per_id() {
        let rows = collapse_rows([(3, 1), (1, 2), (3, 0), (1, 3)]);

        assert_eq!(rows, vec![(1, 3), (3, 0)]);
    }

    /// Expect a request repeating an officer to store its last count once
    #[tokio::test]
    async fn save_officer_counts_collapses_repeated_ids() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_officer(1, "Nobunaga", 5, Some(7))
            .build()
            .await?;

        let saved = OwnershipService::new(&test.state.db)
            .save_officer_counts(
                &alice(),
                &[
                    OfficerCountDto { officer_id: 1, count: 2 },
                    OfficerCountDto { officer_id: 1, count: 3 },
                ],
            )
            .await
            .unwrap();

        assert_eq!(saved, 1);
        let counts = UserOfficerRepository::new(&test.state.db)
            .get_counts("alice")
            .await?;
        assert_eq!(counts, vec![(1, 3)]);

        Ok(())
    }

    fn alice() -> Identity {
        Identity::parse("alice").unwrap()
    }

    /// Expect negative counts to be clamped and unknown officers ignored
    #[tokio::test]
    async fn save_officer_counts_clamps_and_filters() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .with_officer(1, "Nobunaga", 5, Some(7))
            .with_officer(2, "Hideyoshi", 5, Some(6))
            .build()
            .await?;

        let saved = OwnershipService::new(&test.state.db)
            .save_officer_counts(
                &alice(),
                &[
                    OfficerCountDto { officer_id: 1, count: 2 },
                    OfficerCountDto { officer_id: 2, count: -1 },
                    OfficerCountDto { officer_id: 99, count: 1 },
                ],
            )
            .await
            .unwrap();

        assert_eq!(saved, 2);
        let mut counts = UserOfficerRepository::new(&test.state.db)
            .get_counts("alice")
            .await?;
        counts.sort();
        assert_eq!(counts, vec![(1, 2), (2, 0)]);

        Ok(())
    }

    /// Expect toggles to become counts and exclusive skills to be ignored
    #[tokio::test]
    async fn save_skill_ownership_writes_flags() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_roster_tables()
            .with_skill(10, "Kachidoki", Some("Nobunaga"), None)
            .with_skill(11, "Teppo", None, Some("Ieyasu"))
            .with_owned_skill("alice", 10, 1)
            .build()
            .await?;
        test.roster()
            .insert_exclusive_skill(12, "Tenka Fubu", "Nobunaga")
            .await?;

        let saved = OwnershipService::new(&test.state.db)
            .save_skill_ownership(
                &alice(),
                &[
                    SkillOwnershipDto { skill_id: 10, owned: false },
                    SkillOwnershipDto { skill_id: 11, owned: true },
                    SkillOwnershipDto { skill_id: 12, owned: true },
                ],
            )
            .await
            .unwrap();

        assert_eq!(saved, 2);
        let owned = UserSkillRepository::new(&test.state.db)
            .get_owned_ids("alice")
            .await?;
        assert_eq!(owned, vec![11]);

        Ok(())
    }
}
