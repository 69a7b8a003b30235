use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use gunshi::{
    model::identity::{IdentityDto, SetIdentityDto},
    server::{
        controller::identity::{clear_identity, get_identity, set_identity},
        model::session::identity::SessionIdentity,
    },
};

use super::*;

/// Expect 404 when no name was chosen for the session
#[tokio::test]
async fn get_returns_not_found_without_identity() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_identity(State(test.into_app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the chosen name to be returned
#[tokio::test]
async fn get_returns_identity_in_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    test.sign_in("alice").await?;

    let result = get_identity(State(test.into_app_state()), test.session).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: IdentityDto = read_json(resp).await;
    assert_eq!(body.name, "alice");

    Ok(())
}

/// Expect the name to be trimmed before it is stored
#[tokio::test]
async fn set_trims_and_stores_name() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = set_identity(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SetIdentityDto {
            name: "  alice ".to_string(),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: IdentityDto = read_json(resp).await;
    assert_eq!(body.name, "alice");

    let stored = SessionIdentity::get(&test.session).await.unwrap();
    assert_eq!(stored.map(|i| i.into_inner()), Some("alice".to_string()));

    Ok(())
}

/// Expect 400 for a blank name and the previous identity to be kept
#[tokio::test]
async fn set_rejects_blank_name() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    test.sign_in("alice").await?;

    let result = set_identity(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SetIdentityDto {
            name: "   ".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = SessionIdentity::get(&test.session).await.unwrap();
    assert!(stored.is_some());

    Ok(())
}

/// Expect 400 for `..`, which would be dropped from roster and formation URLs
#[tokio::test]
async fn set_rejects_dot_segment_name() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = set_identity(
        State(test.into_app_state()),
        test.session.clone(),
        Json(SetIdentityDto {
            name: "..".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SessionIdentity::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 204 and an empty session after clearing
#[tokio::test]
async fn clear_removes_identity() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    test.sign_in("alice").await?;

    let result = clear_identity(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(SessionIdentity::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect clearing an empty session to succeed
#[tokio::test]
async fn clear_without_identity_succeeds() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = clear_identity(State(test.into_app_state()), test.session).await;

    assert!(result.is_ok());

    Ok(())
}
