use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gunshi::{
    model::roster::{OfficerCountDto, OfficerEntryDto, RosterDto, SkillDto, SkillOwnershipDto},
    server::controller::roster::{
        get_officers, get_roster, get_skills, put_owned_officers, put_owned_skills,
    },
};

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_roster_tables()
        .with_officer(1, "Nobunaga", 5, Some(7))
        .with_officer(2, "Hideyoshi", 4, Some(6))
        .with_officer(3, "Ieyasu", 5, Some(7))
        .with_skill(10, "Kachidoki", Some("Nobunaga"), None)
        .with_skill(11, "Teppo", Some("Ieyasu"), Some("Hideyoshi"))
        .with_owned_officer("alice", 1, 2)
        .with_owned_officer("alice", 2, 0)
        .with_owned_skill("alice", 11, 1)
        .build()
        .await
}

/// Expect 401 from every roster route without an identity
#[tokio::test]
async fn routes_require_identity() -> Result<(), TestError> {
    let test = setup().await?;

    let officers = get_officers(State(test.into_app_state()), test.session.clone()).await;
    let skills = get_skills(State(test.into_app_state()), test.session.clone()).await;
    let roster = get_roster(
        State(test.into_app_state()),
        test.session.clone(),
        Path("alice".to_string()),
    )
    .await;

    for status in [
        officers.err().map(|e| e.into_response().status()),
        skills.err().map(|e| e.into_response().status()),
        roster.err().map(|e| e.into_response().status()),
    ] {
        assert_eq!(status, Some(StatusCode::UNAUTHORIZED));
    }

    Ok(())
}

/// Expect the catalog ordered by rarity then cost, carrying the viewer's counts
#[tokio::test]
async fn officers_carry_viewer_counts() -> Result<(), TestError> {
    let test = setup().await?;
    test.sign_in("alice").await?;

    let result = get_officers(State(test.into_app_state()), test.session).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let entries: Vec<OfficerEntryDto> = read_json(resp).await;
    let summary: Vec<(&str, i32)> = entries
        .iter()
        .map(|e| (e.officer.name.as_str(), e.count))
        .collect();
    assert_eq!(summary, vec![("Ieyasu", 0), ("Nobunaga", 2), ("Hideyoshi", 0)]);

    Ok(())
}

/// Expect saved counts to be visible in the next catalog request
#[tokio::test]
async fn put_owned_officers_overwrites_counts() -> Result<(), TestError> {
    let test = setup().await?;
    test.sign_in("alice").await?;

    let result = put_owned_officers(
        State(test.into_app_state()),
        test.session.clone(),
        Json(vec![
            OfficerCountDto { officer_id: 1, count: 0 },
            OfficerCountDto { officer_id: 3, count: 1 },
        ]),
    )
    .await;
    let written: usize = read_json(result.unwrap().into_response()).await;
    assert_eq!(written, 2);

    let result = get_officers(State(test.into_app_state()), test.session).await;
    let entries: Vec<OfficerEntryDto> = read_json(result.unwrap().into_response()).await;
    let owned: Vec<&str> = entries
        .iter()
        .filter(|e| e.count > 0)
        .map(|e| e.officer.name.as_str())
        .collect();
    assert_eq!(owned, vec!["Ieyasu"]);

    Ok(())
}

/// Expect skill flags to follow owned skills and owned inheritors
#[tokio::test]
async fn skills_are_annotated_for_viewer() -> Result<(), TestError> {
    let test = setup().await?;
    test.sign_in("alice").await?;

    let result = get_skills(State(test.into_app_state()), test.session).await;

    let skills: Vec<SkillDto> = read_json(result.unwrap().into_response()).await;
    let flags: Vec<(&str, bool, bool)> = skills
        .iter()
        .map(|s| (s.name.as_str(), s.is_owned, s.is_inheritable))
        .collect();
    assert_eq!(
        flags,
        vec![("Kachidoki", false, true), ("Teppo", true, false)]
    );

    Ok(())
}

/// Expect toggled ownership to be stored for every listed skill
#[tokio::test]
async fn put_owned_skills_toggles_ownership() -> Result<(), TestError> {
    let test = setup().await?;
    test.sign_in("alice").await?;

    let result = put_owned_skills(
        State(test.into_app_state()),
        test.session.clone(),
        Json(vec![
            SkillOwnershipDto { skill_id: 10, owned: true },
            SkillOwnershipDto { skill_id: 11, owned: false },
        ]),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_skills(State(test.into_app_state()), test.session).await;
    let skills: Vec<SkillDto> = read_json(result.unwrap().into_response()).await;
    let owned: Vec<&str> = skills
        .iter()
        .filter(|s| s.is_owned)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(owned, vec!["Kachidoki"]);

    Ok(())
}

/// Expect another member's roster to list only officers with a positive count
#[tokio::test]
async fn roster_of_owner_lists_owned_officers() -> Result<(), TestError> {
    let test = setup().await?;
    test.sign_in("bob").await?;

    let result = get_roster(
        State(test.into_app_state()),
        test.session,
        Path("alice".to_string()),
    )
    .await;

    let roster: RosterDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(roster.owner, "alice");
    let officers: Vec<&str> = roster.officers.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(officers, vec!["Nobunaga"]);
    assert_eq!(roster.skills.len(), 2);

    Ok(())
}
