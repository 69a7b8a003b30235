//! Rules shared by every roster view: inheritability, ordering, filtering and lookups.

use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap, HashSet},
};

use crate::model::roster::{
    OfficerCountDto, OfficerDto, OfficerEntryDto, RosterDto, SkillDto, SkillOwnershipDto,
};

/// A skill can be inherited when one of its inheritor officers is owned, compared by exact name.
pub fn is_inheritable(
    inherit1_name: Option<&str>,
    inherit2_name: Option<&str>,
    owned_officer_names: &HashSet<&str>,
) -> bool {
    [inherit1_name, inherit2_name]
        .into_iter()
        .flatten()
        .any(|name| owned_officer_names.contains(name))
}

/// Sets the owned and inheritable flags of every skill for one member.
pub fn annotate_skills(
    skills: &mut [SkillDto],
    owned_skill_ids: &HashSet<i32>,
    owned_officers: &[OfficerDto],
) {
    let owned_names: HashSet<&str> = owned_officers.iter().map(|o| o.name.as_str()).collect();

    for skill in skills.iter_mut() {
        skill.is_owned = owned_skill_ids.contains(&skill.id);
        skill.is_inheritable = is_inheritable(
            skill.inherit1_name.as_deref(),
            skill.inherit2_name.as_deref(),
            &owned_names,
        );
    }
}

/// Rarity descending, then name ascending.
pub fn compare_owned_officers(a: &OfficerDto, b: &OfficerDto) -> Ordering {
    b.rarity.cmp(&a.rarity).then_with(|| a.name.cmp(&b.name))
}

/// Rarity descending, cost ascending with unknown costs last, then name ascending.
pub fn compare_catalog_officers(a: &OfficerDto, b: &OfficerDto) -> Ordering {
    let cost = match (a.cost, b.cost) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    b.rarity
        .cmp(&a.rarity)
        .then(cost)
        .then_with(|| a.name.cmp(&b.name))
}

/// Skills offered for inherited slots: ones that have an inheritor and are owned or inheritable.
pub fn selectable_skills(skills: &[SkillDto]) -> Vec<&SkillDto> {
    skills
        .iter()
        .filter(|s| s.inherit1_name.is_some() || s.inherit2_name.is_some())
        .filter(|s| s.is_owned || s.is_inheritable)
        .collect()
}

/// Ownership status words of a skill, empty when neither applies.
pub fn skill_status(skill: &SkillDto) -> Vec<&'static str> {
    let mut flags = Vec::with_capacity(2);
    if skill.is_owned {
        flags.push("所持");
    }
    if skill.is_inheritable {
        flags.push("伝授可");
    }
    flags
}

/// Label shown for a skill in the inherited skill picker.
pub fn skill_option_label(skill: &SkillDto) -> String {
    let flags = skill_status(skill);
    let status = if flags.is_empty() {
        "対象外".to_string()
    } else {
        flags.join("/")
    };

    format!(
        "{}（{}・{}）",
        skill.name,
        skill.category.as_deref().unwrap_or("種類不明"),
        status
    )
}

/// Immutable id lookups over a loaded roster.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RosterIndex {
    officers: HashMap<i32, OfficerDto>,
    skills: HashMap<i32, SkillDto>,
}

impl RosterIndex {
    pub fn new(
        officers: impl IntoIterator<Item = OfficerDto>,
        skills: impl IntoIterator<Item = SkillDto>,
    ) -> Self {
        Self {
            officers: officers.into_iter().map(|o| (o.id, o)).collect(),
            skills: skills.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    pub fn officer(&self, id: i32) -> Option<&OfficerDto> {
        self.officers.get(&id)
    }

    pub fn skill(&self, id: i32) -> Option<&SkillDto> {
        self.skills.get(&id)
    }
}

impl From<&RosterDto> for RosterIndex {
    fn from(roster: &RosterDto) -> Self {
        Self::new(roster.officers.iter().cloned(), roster.skills.iter().cloned())
    }
}

/// Filters of the officer catalog screen. `None` and empty values match everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OfficerFilter {
    pub name: String,
    pub rarity: Option<i32>,
    pub cost: Option<i32>,
    pub faction: Option<String>,
}

impl OfficerFilter {
    pub fn matches(&self, officer: &OfficerDto) -> bool {
        if !self.name.is_empty() && !officer.name.contains(self.name.as_str()) {
            return false;
        }
        if self.rarity.is_some_and(|r| officer.rarity != r) {
            return false;
        }
        if self.cost.is_some() && officer.cost != self.cost {
            return false;
        }
        if self.faction.is_some() && officer.faction != self.faction {
            return false;
        }
        true
    }

    pub fn apply<'a>(&self, entries: &'a [OfficerEntryDto]) -> Vec<&'a OfficerEntryDto> {
        entries.iter().filter(|e| self.matches(&e.officer)).collect()
    }
}

/// Values offered by the officer catalog filters
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OfficerFilterOptions {
    /// Highest rarity first
    pub rarities: Vec<i32>,
    pub costs: Vec<i32>,
    pub factions: Vec<String>,
}

impl OfficerFilterOptions {
    pub fn from_catalog(entries: &[OfficerEntryDto]) -> Self {
        let rarities: BTreeSet<i32> = entries.iter().map(|e| e.officer.rarity).collect();
        let costs: BTreeSet<i32> = entries.iter().filter_map(|e| e.officer.cost).collect();
        let factions: BTreeSet<String> = entries
            .iter()
            .filter_map(|e| e.officer.faction.clone())
            .filter(|f| !f.is_empty())
            .collect();

        Self {
            rarities: rarities.into_iter().rev().collect(),
            costs: costs.into_iter().collect(),
            factions: factions.into_iter().collect(),
        }
    }
}

/// Filters of the skill catalog screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillFilter {
    pub name: String,
    pub category: Option<String>,
}

impl SkillFilter {
    pub fn matches(&self, skill: &SkillDto) -> bool {
        if self.category.is_some() && skill.category != self.category {
            return false;
        }
        self.name.is_empty() || skill.name.contains(self.name.as_str())
    }
}

/// Distinct, sorted skill categories.
pub fn skill_categories(skills: &[SkillDto]) -> Vec<String> {
    skills
        .iter()
        .filter_map(|s| s.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Adds `delta` to the count of `officer_id`, never going below zero.
pub fn adjust_count(entries: &mut [OfficerEntryDto], officer_id: i32, delta: i32) {
    if let Some(entry) = entries.iter_mut().find(|e| e.officer.id == officer_id) {
        entry.count = (entry.count + delta).max(0);
    }
}

/// Rows written when saving officer ownership: every listed officer, including zero counts.
pub fn officer_counts(entries: &[OfficerEntryDto]) -> Vec<OfficerCountDto> {
    entries
        .iter()
        .map(|e| OfficerCountDto {
            officer_id: e.officer.id,
            count: e.count,
        })
        .collect()
}

pub fn toggle_owned(skills: &mut [SkillDto], skill_id: i32) {
    if let Some(skill) = skills.iter_mut().find(|s| s.id == skill_id) {
        skill.is_owned = !skill.is_owned;
    }
}

/// Rows written when saving skill ownership: every listed skill, owned or not.
pub fn skill_ownership(skills: &[SkillDto]) -> Vec<SkillOwnershipDto> {
    skills
        .iter()
        .map(|s| SkillOwnershipDto {
            skill_id: s.id,
            owned: s.is_owned,
        })
        .collect()
}
