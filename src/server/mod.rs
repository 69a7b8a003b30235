//! Server side of Gunshi.
//!
//! HTTP routing, session identity, database access and the services that load and save
//! rosters and formations.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
