use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gunshi::{
    model::formation::{FormationBoardDto, FormationDto, SaveFormationDto, SavedFormationDto, SlotMap},
    server::controller::formation::{get_board, get_formation, save_formation},
};

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_roster_tables()
        .with_officer(1, "Nobunaga", 5, Some(7))
        .with_officer(2, "Hideyoshi", 5, Some(6))
        .with_skill(10, "Kachidoki", Some("Nobunaga"), None)
        .with_owned_officer("alice", 1, 1)
        .with_owned_officer("alice", 2, 1)
        .build()
        .await
}

fn leader_with_skill() -> SaveFormationDto {
    let mut slots = SlotMap::default();
    slots.leader.officer_id = Some(1);
    slots.leader.inherit1_id = Some(10);

    SaveFormationDto {
        answer_comment: Some("Open with Kachidoki".to_string()),
        slots,
        ..Default::default()
    }
}

fn path(owner: &str, advisor: &str, label: &str) -> Path<(String, String, String)> {
    Path((owner.to_string(), advisor.to_string(), label.to_string()))
}

/// Expect a formation saved by the viewer to load back with its slots and comment
#[tokio::test]
async fn save_then_get_returns_formation() -> Result<(), TestError> {
    let test = setup().await?;
    test.sign_in("bob").await?;

    let result = save_formation(
        State(test.into_app_state()),
        test.session.clone(),
        Path(("alice".to_string(), "編成1".to_string())),
        Json(leader_with_skill()),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let saved: SavedFormationDto = read_json(resp).await;
    assert_eq!(saved.label, "編成1");

    let result = get_formation(
        State(test.into_app_state()),
        test.session,
        path("alice", "bob", "編成1"),
    )
    .await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let formation: FormationDto = read_json(resp).await;
    assert_eq!(formation.id, saved.id);
    assert_eq!(formation.slots.leader.officer_id, Some(1));
    assert_eq!(formation.slots.leader.inherit1_id, Some(10));
    assert!(formation.slots.sub1.is_empty());
    assert_eq!(formation.answer_comment.as_deref(), Some("Open with Kachidoki"));

    Ok(())
}

/// Expect 404 for a label nothing was saved under
#[tokio::test]
async fn get_missing_formation_returns_not_found() -> Result<(), TestError> {
    let test = setup().await?;
    test.sign_in("bob").await?;

    let result = get_formation(
        State(test.into_app_state()),
        test.session,
        path("alice", "bob", "編成2"),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 and nothing stored when no position has an officer
#[tokio::test]
async fn save_without_officer_is_rejected() -> Result<(), TestError> {
    let test = setup().await?;
    test.sign_in("bob").await?;

    let result = save_formation(
        State(test.into_app_state()),
        test.session.clone(),
        Path(("alice".to_string(), "編成1".to_string())),
        Json(SaveFormationDto::default()),
    )
    .await;
    assert_eq!(
        result.err().map(|e| e.into_response().status()),
        Some(StatusCode::BAD_REQUEST)
    );

    let result = get_formation(
        State(test.into_app_state()),
        test.session,
        path("alice", "bob", "編成1"),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 when the pair already has five labels and a new one is saved
#[tokio::test]
async fn save_beyond_cap_is_rejected() -> Result<(), TestError> {
    let mut test = setup().await?;
    test.formation().insert_labels("alice", "bob", 4).await?;
    test.formation().insert_formation("alice", "bob", "相談用").await?;
    test.sign_in("bob").await?;

    let result = save_formation(
        State(test.into_app_state()),
        test.session.clone(),
        Path(("alice".to_string(), "編成5".to_string())),
        Json(leader_with_skill()),
    )
    .await;
    assert_eq!(
        result.err().map(|e| e.into_response().status()),
        Some(StatusCode::CONFLICT)
    );

    // Existing labels can still be saved
    let result = save_formation(
        State(test.into_app_state()),
        test.session,
        Path(("alice".to_string(), "編成2".to_string())),
        Json(leader_with_skill()),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 for a label outside 編成1 to 編成5
#[tokio::test]
async fn save_with_invalid_label_is_rejected() -> Result<(), TestError> {
    let test = setup().await?;
    test.sign_in("bob").await?;

    let result = save_formation(
        State(test.into_app_state()),
        test.session,
        Path(("alice".to_string(), "編成6".to_string())),
        Json(leader_with_skill()),
    )
    .await;

    assert_eq!(
        result.err().map(|e| e.into_response().status()),
        Some(StatusCode::BAD_REQUEST)
    );

    Ok(())
}

/// Expect 401 when saving without an identity
#[tokio::test]
async fn save_requires_identity() -> Result<(), TestError> {
    let test = setup().await?;

    let result = save_formation(
        State(test.into_app_state()),
        test.session,
        Path(("alice".to_string(), "編成1".to_string())),
        Json(leader_with_skill()),
    )
    .await;

    assert_eq!(
        result.err().map(|e| e.into_response().status()),
        Some(StatusCode::UNAUTHORIZED)
    );

    Ok(())
}

/// Expect the board to group labels by advisor and include the viewer
#[tokio::test]
async fn board_lists_advisors_and_labels() -> Result<(), TestError> {
    let mut test = setup().await?;
    test.formation().insert_formation("alice", "carol", "編成2").await?;
    test.formation().insert_formation("alice", "carol", "編成1").await?;
    test.sign_in("bob").await?;

    let result = get_board(
        State(test.into_app_state()),
        test.session,
        Path("alice".to_string()),
    )
    .await;

    let board: FormationBoardDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(board.owner, "alice");
    assert_eq!(board.advisors, vec!["bob", "carol"]);
    assert_eq!(board.labels_for("carol"), ["編成1", "編成2"]);
    assert!(board.labels_for("bob").is_empty());

    Ok(())
}
