use gunshi_test_utils::prelude::*;

use crate::model::{
    formation::{FormationKey, SaveFormationDto, SlotMap},
    identity::Identity,
};

mod round_trip;
mod save;

fn identity(name: &str) -> Identity {
    Identity::parse(name).unwrap()
}

fn key(owner: &str, advisor: &str, label: &str) -> FormationKey {
    FormationKey::new(identity(owner), identity(advisor), label)
}

/// Save request with only the leader filled in
fn leader_only(officer_id: i32) -> SaveFormationDto {
    let mut slots = SlotMap::default();
    slots.leader.officer_id = Some(officer_id);

    SaveFormationDto {
        slots,
        ..Default::default()
    }
}

async fn catalog() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_roster_tables()
        .with_officer(1, "Nobunaga", 5, Some(7))
        .with_officer(2, "Hideyoshi", 5, Some(6))
        .with_officer(3, "Ieyasu", 5, Some(7))
        .with_skill(10, "Kachidoki", Some("Nobunaga"), None)
        .with_skill(11, "Teppo", None, Some("Ieyasu"))
        .build()
        .await
}
