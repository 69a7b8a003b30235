//! Catalog and roster views assembled from reference data and ownership records.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        identity::Identity,
        roster::{OfficerDto, OfficerEntryDto, RosterDto, SkillDto},
    },
    roster::{annotate_skills, compare_catalog_officers},
    server::{
        data::{
            officer::OfficerRepository, skill::SkillRepository,
            user_officer::UserOfficerRepository, user_skill::UserSkillRepository,
        },
        error::Error,
        model::db::{OfficerModel, SkillModel},
    },
};

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Owned officers and annotated general skills of `owner`.
    ///
    /// Lookups run in sequence and the first failure is returned.
    ///
    /// # Arguments
    /// - `owner` ([`Identity`]): Member whose roster is loaded, not necessarily the viewer
    ///
    /// # Returns
    /// - `Ok(RosterDto)`: Officers with a count above zero, and general skills flagged as owned
    ///   and as inheritable from one of those officers
    /// - `Err(Error::DbErr(_))`: The first failing lookup
    pub async fn get_roster(&self, owner: &Identity) -> Result<RosterDto, Error> {
        let officers: Vec<OfficerDto> = OfficerRepository::new(self.db)
            .get_owned_by(owner.as_str())
            .await?
            .into_iter()
            .map(officer_dto)
            .collect();

        let skills = self.annotated_skills(owner, &officers).await?;

        Ok(RosterDto {
            owner: owner.to_string(),
            officers,
            skills,
        })
    }

    /// Every officer with the number of copies `viewer` owns
    pub async fn get_officer_catalog(&self, viewer: &Identity) -> Result<Vec<OfficerEntryDto>, Error> {
        let officers = OfficerRepository::new(self.db).get_all().await?;
        let counts: HashMap<i32, i32> = UserOfficerRepository::new(self.db)
            .get_counts(viewer.as_str())
            .await?
            .into_iter()
            .collect();

        let mut entries: Vec<OfficerEntryDto> = officers
            .into_iter()
            .map(|officer| OfficerEntryDto {
                count: counts.get(&officer.id).copied().unwrap_or(0),
                officer: officer_dto(officer),
            })
            .collect();
        entries.sort_by(|a, b| compare_catalog_officers(&a.officer, &b.officer));

        Ok(entries)
    }

    /// General skills ordered by name with `viewer`'s flags
    pub async fn get_skill_catalog(&self, viewer: &Identity) -> Result<Vec<SkillDto>, Error> {
        let owned_officers: Vec<OfficerDto> = OfficerRepository::new(self.db)
            .get_owned_by(viewer.as_str())
            .await?
            .into_iter()
            .map(officer_dto)
            .collect();

        self.annotated_skills(viewer, &owned_officers).await
    }

    async fn annotated_skills(
        &self,
        member: &Identity,
        owned_officers: &[OfficerDto],
    ) -> Result<Vec<SkillDto>, Error> {
        let owned_skill_ids: HashSet<i32> = UserSkillRepository::new(self.db)
            .get_owned_ids(member.as_str())
            .await?
            .into_iter()
            .collect();

        let mut skills: Vec<SkillDto> = SkillRepository::new(self.db)
            .get_general()
            .await?
            .into_iter()
            .map(skill_dto)
            .collect();
        annotate_skills(&mut skills, &owned_skill_ids, owned_officers);

        Ok(skills)
    }
}

fn officer_dto(officer: OfficerModel) -> OfficerDto {
    OfficerDto {
        id: officer.id,
        name: officer.name,
        rarity: officer.rarity,
        cost: officer.cost,
        faction: officer.faction,
        house: officer.house,
        inherent_skill_name: officer.inherent_skill_name,
        inherent_skill_type: officer.inherent_skill_type,
    }
}

fn skill_dto(skill: SkillModel) -> SkillDto {
    SkillDto {
        id: skill.id,
        name: skill.name,
        category: skill.category,
        trigger_rate: skill.trigger_rate,
        description: skill.description,
        inherit1_name: skill.inherit1_name,
        inherit2_name: skill.inherit2_name,
        is_owned: false,
        is_inheritable: false,
    }
}
