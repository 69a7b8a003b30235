use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;

use crate::{model::identity::IdentityError, server::error::error_response};

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::EmptyName | Self::DotSegment => StatusCode::BAD_REQUEST,
            Self::NotInSession => StatusCode::UNAUTHORIZED,
        };

        error_response(status, self.to_string())
    }
}
