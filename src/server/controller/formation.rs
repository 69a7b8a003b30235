use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        formation::{FormationBoardDto, FormationDto, FormationKey, SaveFormationDto, SavedFormationDto},
    },
    server::{
        controller::util::get_identity::{path_identity, require_identity},
        error::{error_response, Error},
        model::app::AppState,
        service::formation::FormationService,
    },
};

pub static FORMATION_TAG: &str = "formation";

/// Get the formation labels written for a member, grouped by advisor
#[utoipa::path(
    get,
    path = "/api/formations/{owner}",
    tag = FORMATION_TAG,
    params(("owner" = String, Path, description = "Member the formations are written for")),
    responses(
        (status = 200, description = "Advisors and their labels", body = FormationBoardDto),
        (status = 400, description = "Owner name is empty", body = ErrorDto),
        (status = 401, description = "No name chosen for the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board(
    State(state): State<AppState>,
    session: Session,
    Path(owner): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let viewer = require_identity(&session).await?;
    let owner = path_identity(&owner)?;

    let board = FormationService::new(&state.db)
        .get_board(owner.as_str(), &viewer)
        .await?;

    Ok((StatusCode::OK, Json(board)))
}

/// Get a formation with its slots
#[utoipa::path(
    get,
    path = "/api/formations/{owner}/{advisor}/{label}",
    tag = FORMATION_TAG,
    params(
        ("owner" = String, Path, description = "Member the formation is written for"),
        ("advisor" = String, Path, description = "Member who wrote the formation"),
        ("label" = String, Path, description = "Formation label, 編成1 to 編成5")
    ),
    responses(
        (status = 200, description = "Formation header and slots", body = FormationDto),
        (status = 400, description = "Owner or advisor name is empty", body = ErrorDto),
        (status = 401, description = "No name chosen for the session", body = ErrorDto),
        (status = 404, description = "Nothing saved under this label", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_formation(
    State(state): State<AppState>,
    session: Session,
    Path((owner, advisor, label)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, Error> {
    require_identity(&session).await?;
    let key = FormationKey::new(path_identity(&owner)?, path_identity(&advisor)?, label);

    let Some(formation) = FormationService::new(&state.db).get_formation(&key).await? else {
        return Ok(error_response(StatusCode::NOT_FOUND, "Formation not found"));
    };

    Ok((StatusCode::OK, Json(formation)).into_response())
}

/// Save a formation as the current member
///
/// The current member becomes the advisor of record; formations of other advisors cannot be
/// changed.
#[utoipa::path(
    put,
    path = "/api/formations/{owner}/{label}",
    tag = FORMATION_TAG,
    params(
        ("owner" = String, Path, description = "Member the formation is written for"),
        ("label" = String, Path, description = "Formation label, 編成1 to 編成5")
    ),
    request_body = SaveFormationDto,
    responses(
        (status = 200, description = "Formation saved", body = SavedFormationDto),
        (status = 400, description = "No officer selected or invalid label", body = ErrorDto),
        (status = 401, description = "No name chosen for the session", body = ErrorDto),
        (status = 409, description = "Five formations already exist for this member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_formation(
    State(state): State<AppState>,
    session: Session,
    Path((owner, label)): Path<(String, String)>,
    Json(formation): Json<SaveFormationDto>,
) -> Result<impl IntoResponse, Error> {
    let viewer = require_identity(&session).await?;
    let key = FormationKey::new(path_identity(&owner)?, viewer.clone(), label);

    let saved = FormationService::new(&state.db)
        .save(&key, &viewer, &formation)
        .await?;

    tracing::debug!(formation_id = saved.id, "Saved formation for {}", key);

    Ok((StatusCode::OK, Json(saved)))
}
