//! Server models: application state, database aliases and session values.

pub mod app;
pub mod db;
pub mod session;
