//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same queries run on a
//! pooled connection or inside a transaction.

pub mod formation;
pub mod officer;
pub mod skill;
pub mod user_officer;
pub mod user_skill;
