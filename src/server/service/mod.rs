//! Service layer holding the rules that sit between controllers and repositories.

pub mod directory;
pub mod formation;
pub mod identity;
pub mod ownership;
pub mod roster;
