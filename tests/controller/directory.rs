use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use gunshi::server::controller::directory::{get_owners, get_users, UserSearchParams};

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_roster_tables()
        .with_officer(1, "Nobunaga", 5, Some(7))
        .with_skill(10, "Kachidoki", Some("Nobunaga"), None)
        .with_owned_officer("Carol", 1, 1)
        .with_owned_skill("dave", 10, 1)
        .with_formation("alice", "Bob", "編成1")
        .build()
        .await
}

/// Expect the user listing to work before a name is chosen
#[tokio::test]
async fn users_are_listed_without_identity() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_users(
        State(test.into_app_state()),
        Query(UserSearchParams { search: None }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<String> = read_json(resp).await;
    assert_eq!(users, vec!["Bob", "Carol", "alice", "dave"]);

    Ok(())
}

/// Expect the search to ignore case
#[tokio::test]
async fn users_are_filtered_by_search() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_users(
        State(test.into_app_state()),
        Query(UserSearchParams {
            search: Some("CAR".to_string()),
        }),
    )
    .await;

    let users: Vec<String> = read_json(result.unwrap().into_response()).await;
    assert_eq!(users, vec!["Carol"]);

    Ok(())
}

/// Expect 401 when listing owners without an identity
#[tokio::test]
async fn owners_require_identity() -> Result<(), TestError> {
    let test = setup().await?;

    let result = get_owners(State(test.into_app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect only members with officer ownership to be listed as owners
#[tokio::test]
async fn owners_are_members_with_officers() -> Result<(), TestError> {
    let test = setup().await?;
    test.sign_in("alice").await?;

    let result = get_owners(State(test.into_app_state()), test.session).await;

    let owners: Vec<String> = read_json(result.unwrap().into_response()).await;
    assert_eq!(owners, vec!["Carol"]);

    Ok(())
}
