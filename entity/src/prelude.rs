pub use super::formation::Entity as Formation;
pub use super::formation_slot::Entity as FormationSlot;
pub use super::officer::Entity as Officer;
pub use super::skill::Entity as Skill;
pub use super::user_officer::Entity as UserOfficer;
pub use super::user_skill::Entity as UserSkill;
