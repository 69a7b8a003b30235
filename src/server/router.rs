//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI description, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with Swagger UI attached.
///
/// # Registered Endpoints
/// - `GET|POST|DELETE /api/identity` - Display name of the session
/// - `GET /api/users`, `GET /api/owners` - Member directory
/// - `GET /api/officers`, `PUT /api/officers/owned` - Officer catalog and counts
/// - `GET /api/skills`, `PUT /api/skills/owned` - General skills and ownership
/// - `GET /api/roster/{owner}` - Officers and skills a member can field
/// - `GET /api/formations/{owner}` - Formation board of a member
/// - `GET /api/formations/{owner}/{advisor}/{label}` - A single formation
/// - `PUT /api/formations/{owner}/{label}` - Save a formation as the current member
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Gunshi", description = "Gunshi API"), tags(
        (name = controller::identity::IDENTITY_TAG, description = "Session display name"),
        (name = controller::directory::DIRECTORY_TAG, description = "Member directory"),
        (name = controller::roster::ROSTER_TAG, description = "Officer and skill ownership"),
        (name = controller::formation::FORMATION_TAG, description = "Formation consultation"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::identity::get_identity,
            controller::identity::set_identity,
            controller::identity::clear_identity
        ))
        .routes(routes!(controller::directory::get_users))
        .routes(routes!(controller::directory::get_owners))
        .routes(routes!(controller::roster::get_officers))
        .routes(routes!(controller::roster::put_owned_officers))
        .routes(routes!(controller::roster::get_skills))
        .routes(routes!(controller::roster::put_owned_skills))
        .routes(routes!(controller::roster::get_roster))
        .routes(routes!(controller::formation::get_board))
        .routes(routes!(controller::formation::get_formation))
        .routes(routes!(controller::formation::save_formation))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
