use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OfficerDto {
    pub id: i32,
    pub name: String,
    pub rarity: i32,
    pub cost: Option<i32>,
    pub faction: Option<String>,
    pub house: Option<String>,
    pub inherent_skill_name: Option<String>,
    pub inherent_skill_type: Option<String>,
}

/// An officer from the catalog together with how many copies the viewer owns
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OfficerEntryDto {
    pub officer: OfficerDto,
    pub count: i32,
}

/// A general (non-exclusive) skill annotated for a specific member
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SkillDto {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub trigger_rate: Option<f64>,
    pub description: Option<String>,
    pub inherit1_name: Option<String>,
    pub inherit2_name: Option<String>,
    /// The member holds the skill directly
    pub is_owned: bool,
    /// The member owns an officer listed as one of the skill's inheritors
    pub is_inheritable: bool,
}

/// Everything an advisor needs to compose formations for one member
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RosterDto {
    pub owner: String,
    /// Owned officers, rarity descending then name ascending
    pub officers: Vec<OfficerDto>,
    pub skills: Vec<SkillDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OfficerCountDto {
    pub officer_id: i32,
    pub count: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SkillOwnershipDto {
    pub skill_id: i32,
    pub owned: bool,
}
