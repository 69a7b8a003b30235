use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        roster::{OfficerCountDto, OfficerEntryDto, RosterDto, SkillDto, SkillOwnershipDto},
    },
    server::{
        controller::util::get_identity::{path_identity, require_identity},
        error::Error,
        model::app::AppState,
        service::{ownership::OwnershipService, roster::RosterService},
    },
};

pub static ROSTER_TAG: &str = "roster";

/// Get the officer catalog with the number of copies the current member owns
#[utoipa::path(
    get,
    path = "/api/officers",
    tag = ROSTER_TAG,
    responses(
        (status = 200, description = "Officers by rarity, cost and name", body = Vec<OfficerEntryDto>),
        (status = 401, description = "No name chosen for the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_officers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let viewer = require_identity(&session).await?;

    let catalog = RosterService::new(&state.db)
        .get_officer_catalog(&viewer)
        .await?;

    Ok((StatusCode::OK, Json(catalog)))
}

/// Overwrite the current member's officer counts
#[utoipa::path(
    put,
    path = "/api/officers/owned",
    tag = ROSTER_TAG,
    request_body = Vec<OfficerCountDto>,
    responses(
        (status = 200, description = "Number of rows written", body = usize),
        (status = 401, description = "No name chosen for the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_owned_officers(
    State(state): State<AppState>,
    session: Session,
    Json(counts): Json<Vec<OfficerCountDto>>,
) -> Result<impl IntoResponse, Error> {
    let viewer = require_identity(&session).await?;

    let written = OwnershipService::new(&state.db)
        .save_officer_counts(&viewer, &counts)
        .await?;

    Ok((StatusCode::OK, Json(written)))
}

/// Get general skills with the current member's owned and inheritable flags
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = ROSTER_TAG,
    responses(
        (status = 200, description = "General skills by name", body = Vec<SkillDto>),
        (status = 401, description = "No name chosen for the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_skills(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let viewer = require_identity(&session).await?;

    let skills = RosterService::new(&state.db)
        .get_skill_catalog(&viewer)
        .await?;

    Ok((StatusCode::OK, Json(skills)))
}

/// Overwrite which general skills the current member owns
#[utoipa::path(
    put,
    path = "/api/skills/owned",
    tag = ROSTER_TAG,
    request_body = Vec<SkillOwnershipDto>,
    responses(
        (status = 200, description = "Number of rows written", body = usize),
        (status = 401, description = "No name chosen for the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_owned_skills(
    State(state): State<AppState>,
    session: Session,
    Json(ownership): Json<Vec<SkillOwnershipDto>>,
) -> Result<impl IntoResponse, Error> {
    let viewer = require_identity(&session).await?;

    let written = OwnershipService::new(&state.db)
        .save_skill_ownership(&viewer, &ownership)
        .await?;

    Ok((StatusCode::OK, Json(written)))
}

/// Get the officers and skills a member can field
#[utoipa::path(
    get,
    path = "/api/roster/{owner}",
    tag = ROSTER_TAG,
    params(("owner" = String, Path, description = "Member whose roster is requested")),
    responses(
        (status = 200, description = "Owned officers and annotated skills", body = RosterDto),
        (status = 400, description = "Owner name is empty", body = ErrorDto),
        (status = 401, description = "No name chosen for the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roster(
    State(state): State<AppState>,
    session: Session,
    Path(owner): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_identity(&session).await?;
    let owner = path_identity(&owner)?;

    let roster = RosterService::new(&state.db).get_roster(&owner).await?;

    Ok((StatusCode::OK, Json(roster)))
}
