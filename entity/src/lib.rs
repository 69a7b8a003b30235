//! SeaORM entities for the Gunshi database schema.

pub mod prelude;

pub mod formation;
pub mod formation_slot;
pub mod officer;
pub mod skill;
pub mod user_officer;
pub mod user_skill;
