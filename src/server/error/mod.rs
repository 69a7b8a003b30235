//! Error types for the Gunshi server.
//!
//! Domain errors carry their own HTTP mapping; everything else is logged and reported to the
//! client as a generic 500.

pub mod config;
pub mod formation;
pub mod identity;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    formation::error::FormationError,
    model::{api::ErrorDto, identity::IdentityError},
    server::error::{config::ConfigError, formation::SyncError},
};

/// Main error type for the server.
///
/// Aggregates domain errors and library errors so handlers can use `?` throughout. The
/// `IntoResponse` implementation lets domain errors pick their own status and turns the rest
/// into a logged 500.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Identity errors (blank or unusable name, no name in session)
/// - Formation errors (label rules, missing officer, wrong advisor)
/// - Sync errors (a formation write step failed)
/// - External library errors (database, sessions, Valkey)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Missing or empty display name.
    #[error(transparent)]
    IdentityError(#[from] IdentityError),
    /// Formation rule violated (no officer, label cap, wrong advisor).
    #[error(transparent)]
    FormationError(#[from] FormationError),
    /// One of the formation write steps failed.
    #[error(transparent)]
    SyncError(#[from] SyncError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::IdentityError(err) => err.into_response(),
            Self::FormationError(err) => err.into_response(),
            Self::SyncError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON [`ErrorDto`] response with the given status.
///
/// # Arguments
/// - `status` ([`StatusCode`]): HTTP status of the response
/// - `message` (`impl Into<String>`): Text placed in the `error` field
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
