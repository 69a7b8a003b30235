//! Database model type aliases.

/// Officer reference data (`officers` table).
pub type OfficerModel = entity::officer::Model;

/// Skill reference data (`skills` table), exclusive when `owner_name` is set.
pub type SkillModel = entity::skill::Model;

/// Officer ownership record keyed by (user_key, officer_id).
pub type UserOfficerModel = entity::user_officer::Model;

/// Skill ownership record keyed by (user_key, skill_id).
pub type UserSkillModel = entity::user_skill::Model;

/// Formation header keyed by id, unique by (owner_key, advisor_key, label).
pub type FormationModel = entity::formation::Model;

/// One position of a formation.
pub type FormationSlotModel = entity::formation_slot::Model;
