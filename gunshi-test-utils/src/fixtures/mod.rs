//! Test fixture modules for database record creation.
//!
//! - `factory` - Active models with sensible defaults
//! - `roster` - Officer and skill catalog rows plus ownership records
//! - `formation` - Formation headers and slot rows

pub mod factory;
pub mod formation;
pub mod roster;
