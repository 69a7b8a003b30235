use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    formation::error::FormationError,
    server::error::{error_response, InternalServerError},
};

/// Write step of a formation save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncStep {
    UpsertHeader,
    DeleteSlots,
    InsertSlots,
}

impl fmt::Display for SyncStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UpsertHeader => "save formation header",
            Self::DeleteSlots => "delete previous formation slots",
            Self::InsertSlots => "insert formation slots",
        })
    }
}

#[derive(Error, Debug)]
#[error("Failed to {step}: {source}")]
pub struct SyncError {
    pub step: SyncStep,
    pub source: sea_orm::DbErr,
}

impl IntoResponse for SyncError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

impl IntoResponse for FormationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NoOfficerSelected | Self::InvalidLabel(_) => StatusCode::BAD_REQUEST,
            Self::NotAdvisorOfRecord => StatusCode::FORBIDDEN,
            Self::FormationLimitReached => StatusCode::CONFLICT,
            Self::InvalidState { .. } | Self::StaleResponse | Self::Backend(_) => {
                return InternalServerError(self).into_response()
            }
        };

        tracing::debug!("{}", self);

        error_response(status, self.to_string())
    }
}
