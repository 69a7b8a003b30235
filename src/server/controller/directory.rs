use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::util::get_identity::require_identity, error::Error, model::app::AppState,
        service::directory::DirectoryService,
    },
};

pub static DIRECTORY_TAG: &str = "directory";

#[derive(Deserialize, IntoParams)]
pub struct UserSearchParams {
    /// Case-insensitive substring of the name
    pub search: Option<String>,
}

/// List every name that has recorded ownership or formations
#[utoipa::path(
    get,
    path = "/api/users",
    tag = DIRECTORY_TAG,
    params(UserSearchParams),
    responses(
        (status = 200, description = "Known names, sorted", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(params): Query<UserSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let users = DirectoryService::new(&state.db)
        .get_users(params.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(users)))
}

/// List members that registered officers and can receive formations
#[utoipa::path(
    get,
    path = "/api/owners",
    tag = DIRECTORY_TAG,
    responses(
        (status = 200, description = "Names with officer ownership, sorted", body = Vec<String>),
        (status = 401, description = "No name chosen for the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_identity(&session).await?;

    let owners = DirectoryService::new(&state.db).get_owners().await?;

    Ok((StatusCode::OK, Json(owners)))
}
