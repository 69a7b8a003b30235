//! The display name held in the session.
//!
//! Setting a name is not a login: no password or token is involved and two browsers typing
//! the same name share everything. The last write wins.

use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::identity::Identity,
    server::{error::Error, model::session::identity::SessionIdentity},
};

pub struct IdentityStore<'a> {
    session: &'a Session,
}

impl<'a> IdentityStore<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Identity previously set in this session
    pub async fn get(&self) -> Result<Option<Identity>, Error> {
        SessionIdentity::get(self.session).await
    }

    /// Trims and stores `name` as the session identity, replacing any previous one.
    ///
    /// # Returns
    /// - `Ok(Identity)`: The stored, trimmed name
    /// - `Err(Error::IdentityError(_))`: `EmptyName` when nothing remains after trimming,
    ///   `DotSegment` for `.` or `..`. The session is left unchanged.
    /// - `Err(Error::SessionError(_))`: Failed to write the session
    pub async fn set(&self, name: &str) -> Result<Identity, Error> {
        let identity = Identity::parse(name)?;
        SessionIdentity::insert(self.session, &identity).await?;

        tracing::info!(identity = %identity, "Identity set");

        Ok(identity)
    }

    /// Removes the session identity. Clearing an empty session succeeds.
    pub async fn clear(&self) -> Result<(), Error> {
        SessionIdentity::remove(self.session).await?;

        tracing::info!("Identity cleared");

        Ok(())
    }
}
