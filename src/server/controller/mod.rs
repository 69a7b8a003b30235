//! HTTP controller endpoints for the Gunshi web API.
//!
//! Handlers resolve the session identity, call into services and map results to JSON
//! responses. Every handler is annotated for the OpenAPI document served at `/api/docs`.

pub mod directory;
pub mod formation;
pub mod identity;
pub mod roster;
pub mod util;
