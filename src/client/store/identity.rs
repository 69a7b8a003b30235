use gunshi::model::identity::Identity;

/// Display name of the current session as known by the client
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdentityState {
    pub identity: Option<Identity>,
    /// Whether the server has been asked yet; guards redirect before the first answer
    pub fetched: bool,
}

impl IdentityState {
    pub fn name(&self) -> Option<&str> {
        self.identity.as_ref().map(Identity::as_str)
    }
}
