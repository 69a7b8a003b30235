//! Typed session values stored through tower-sessions (Redis-backed in production).

pub mod identity;
