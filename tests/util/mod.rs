//! Helpers shared by the controller integration tests.

use axum::{body::to_bytes, response::Response};
use gunshi::server::model::{
    app::AppState,
    session::identity::{SessionIdentity, SESSION_IDENTITY_KEY},
};
use gunshi_test_utils::{TestError, TestSetup};
use serde::de::DeserializeOwned;

#[allow(async_fn_in_trait)]
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;

    /// Stores `name` as the session identity, as choosing a name on the login screen does
    async fn sign_in(&self, name: &str) -> Result<(), TestError>;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        self.state()
    }

    async fn sign_in(&self, name: &str) -> Result<(), TestError> {
        self.session
            .insert(SESSION_IDENTITY_KEY, SessionIdentity(name.to_string()))
            .await?;

        Ok(())
    }
}

/// Deserializes a JSON response body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to parse response body")
}
