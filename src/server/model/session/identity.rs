use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::identity::Identity, server::error::Error};

pub const SESSION_IDENTITY_KEY: &str = "gunshi:identity";

#[derive(Deserialize, Serialize, Debug)]
pub struct SessionIdentity(pub String);

impl SessionIdentity {
    /// Insert identity into session, replacing any previous one
    pub async fn insert(session: &Session, identity: &Identity) -> Result<(), Error> {
        session
            .insert(
                SESSION_IDENTITY_KEY,
                SessionIdentity(identity.as_str().to_string()),
            )
            .await?;

        Ok(())
    }

    /// Get identity from session
    ///
    /// A stored value that is blank after trimming is treated as absent.
    pub async fn get(session: &Session) -> Result<Option<Identity>, Error> {
        Ok(session
            .get::<SessionIdentity>(SESSION_IDENTITY_KEY)
            .await?
            .and_then(|SessionIdentity(name)| Identity::parse(&name).ok()))
    }

    /// Remove identity from session
    pub async fn remove(session: &Session) -> Result<(), Error> {
        session
            .remove::<SessionIdentity>(SESSION_IDENTITY_KEY)
            .await?;

        Ok(())
    }
}
