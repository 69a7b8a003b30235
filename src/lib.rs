//! Gunshi, a formation consultation tool for strategy game guild members.
//!
//! Members register which officers and skills they own; advisors compose formations for
//! them. The crate is split into shared pieces compiled for both the web client and the
//! server (`model`, `formation`, `roster`) and the server itself behind the `server`
//! feature.

pub mod formation;
pub mod model;
pub mod roster;

#[cfg(feature = "server")]
pub mod server;
