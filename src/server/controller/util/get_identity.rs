use tower_sessions::Session;

use crate::{
    model::identity::{Identity, IdentityError},
    server::{error::Error, model::session::identity::SessionIdentity},
};

/// Identity chosen in this session
///
/// # Returns
/// - `Ok(Identity)`: A name has been set for the session
/// - `Err(Error::IdentityError(IdentityError::NotInSession))`: No name set, mapped to 401
/// - `Err(Error)`: Session store failure
pub async fn require_identity(session: &Session) -> Result<Identity, Error> {
    SessionIdentity::get(session)
        .await?
        .ok_or(Error::IdentityError(IdentityError::NotInSession))
}

/// Parses a name taken from the request path
pub fn path_identity(name: &str) -> Result<Identity, Error> {
    Ok(Identity::parse(name)?)
}
