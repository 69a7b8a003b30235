use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        identity::{IdentityDto, SetIdentityDto},
    },
    server::{
        error::{error_response, Error},
        model::app::AppState,
        service::identity::IdentityStore,
    },
};

pub static IDENTITY_TAG: &str = "identity";

/// Get the display name chosen for this session
#[utoipa::path(
    get,
    path = "/api/identity",
    tag = IDENTITY_TAG,
    responses(
        (status = 200, description = "Name chosen for the session", body = IdentityDto),
        (status = 404, description = "No name chosen yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_identity(
    State(_state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let Some(identity) = IdentityStore::new(&session).get().await? else {
        return Ok(error_response(StatusCode::NOT_FOUND, "No name chosen"));
    };

    Ok((
        StatusCode::OK,
        Json(IdentityDto {
            name: identity.into_inner(),
        }),
    )
        .into_response())
}

/// Choose a display name for this session
///
/// The name is not verified; anyone using the same name shares its data.
#[utoipa::path(
    post,
    path = "/api/identity",
    tag = IDENTITY_TAG,
    request_body = SetIdentityDto,
    responses(
        (status = 200, description = "Name stored, trimmed", body = IdentityDto),
        (status = 400, description = "Name is empty after trimming", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_identity(
    State(_state): State<AppState>,
    session: Session,
    Json(request): Json<SetIdentityDto>,
) -> Result<impl IntoResponse, Error> {
    let identity = IdentityStore::new(&session).set(&request.name).await?;

    Ok((
        StatusCode::OK,
        Json(IdentityDto {
            name: identity.into_inner(),
        }),
    ))
}

/// Forget the display name of this session
#[utoipa::path(
    delete,
    path = "/api/identity",
    tag = IDENTITY_TAG,
    responses(
        (status = 204, description = "Name removed"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_identity(
    State(_state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    IdentityStore::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}
