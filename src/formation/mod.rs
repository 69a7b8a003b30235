//! Formation editing shared by the client and the server.

pub mod board;
pub mod editor;
pub mod error;
pub mod label;
pub mod share;
