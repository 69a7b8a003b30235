use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::identity::Identity;

/// One of the three positions of a formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SlotPosition {
    Leader,
    Sub1,
    Sub2,
}

impl SlotPosition {
    /// Every position in display order.
    pub const ALL: [SlotPosition; 3] = [SlotPosition::Leader, SlotPosition::Sub1, SlotPosition::Sub2];

    /// Value stored in the `position` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leader => "leader",
            Self::Sub1 => "sub1",
            Self::Sub2 => "sub2",
        }
    }

    /// In-game name of the position.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Leader => "主将",
            Self::Sub1 => "副将1",
            Self::Sub2 => "副将2",
        }
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown formation position: {:?}", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for SlotPosition {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leader" => Ok(Self::Leader),
            "sub1" => Ok(Self::Sub1),
            "sub2" => Ok(Self::Sub2),
            other => Err(UnknownPosition(other.to_string())),
        }
    }
}

/// Which of the two inherited skill slots of a position is addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillSlot {
    First,
    Second,
}

impl TryFrom<u8> for SkillSlot {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(other),
        }
    }
}

/// Assignment of a single position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SlotState {
    pub officer_id: Option<i32>,
    pub inherit1_id: Option<i32>,
    pub inherit2_id: Option<i32>,
}

impl SlotState {
    pub fn is_empty(&self) -> bool {
        self.officer_id.is_none() && self.inherit1_id.is_none() && self.inherit2_id.is_none()
    }

    pub fn skill(&self, slot: SkillSlot) -> Option<i32> {
        match slot {
            SkillSlot::First => self.inherit1_id,
            SkillSlot::Second => self.inherit2_id,
        }
    }

    pub fn set_skill(&mut self, slot: SkillSlot, skill_id: Option<i32>) {
        match slot {
            SkillSlot::First => self.inherit1_id = skill_id,
            SkillSlot::Second => self.inherit2_id = skill_id,
        }
    }
}

/// The three positions of a formation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SlotMap {
    pub leader: SlotState,
    pub sub1: SlotState,
    pub sub2: SlotState,
}

impl SlotMap {
    pub fn get(&self, position: SlotPosition) -> &SlotState {
        match position {
            SlotPosition::Leader => &self.leader,
            SlotPosition::Sub1 => &self.sub1,
            SlotPosition::Sub2 => &self.sub2,
        }
    }

    pub fn get_mut(&mut self, position: SlotPosition) -> &mut SlotState {
        match position {
            SlotPosition::Leader => &mut self.leader,
            SlotPosition::Sub1 => &mut self.sub1,
            SlotPosition::Sub2 => &mut self.sub2,
        }
    }

    /// Positions in display order paired with their state.
    pub fn iter(&self) -> impl Iterator<Item = (SlotPosition, &SlotState)> {
        SlotPosition::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// True when at least one position has an officer assigned.
    pub fn has_officer(&self) -> bool {
        self.iter().any(|(_, s)| s.officer_id.is_some())
    }

    /// Positions that carry an officer, paired with that officer's id.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotPosition, i32, &SlotState)> {
        self.iter()
            .filter_map(|(p, s)| s.officer_id.map(|officer_id| (p, officer_id, s)))
    }
}

/// Identifies one formation: whose it is, who composed it, and which label it sits under.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormationKey {
    pub owner: Identity,
    pub advisor: Identity,
    pub label: String,
}

impl FormationKey {
    pub fn new(owner: Identity, advisor: Identity, label: impl Into<String>) -> Self {
        Self {
            owner,
            advisor,
            label: label.into(),
        }
    }
}

impl fmt::Display for FormationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.owner, self.advisor, self.label)
    }
}

/// A saved formation with its slots
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FormationDto {
    pub id: i32,
    pub owner: String,
    pub advisor: String,
    pub label: String,
    pub request_comment: Option<String>,
    pub answer_comment: Option<String>,
    pub slots: SlotMap,
}

/// Request body for saving a formation as the current advisor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SaveFormationDto {
    /// Identifier of the header when it is already known to the client
    pub id: Option<i32>,
    pub request_comment: Option<String>,
    pub answer_comment: Option<String>,
    pub slots: SlotMap,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SavedFormationDto {
    pub id: i32,
    pub label: String,
}

/// Formation labels written for one owner, grouped by advisor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FormationBoardDto {
    pub owner: String,
    /// Advisors with at least one formation plus the viewer, sorted
    pub advisors: Vec<String>,
    /// Sorted, de-duplicated labels keyed by advisor
    pub labels: BTreeMap<String, Vec<String>>,
}

impl FormationBoardDto {
    /// Labels written by `advisor`, empty when they have none.
    pub fn labels_for(&self, advisor: &str) -> &[String] {
        self.labels.get(advisor).map(Vec::as_slice).unwrap_or(&[])
    }
}
