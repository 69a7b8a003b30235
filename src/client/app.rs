use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{router::Route, store::identity::IdentityState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut identity_store = use_store(IdentityState::default);
    use_context_provider(|| identity_store);

    // Ask the server which name this session uses
    #[cfg(feature = "web")]
    {
        use gunshi::model::identity::Identity;

        let future = use_resource(|| async move { crate::client::api::get_identity().await });

        match &*future.read_unchecked() {
            Some(Ok(dto)) => {
                if !identity_store.read().fetched {
                    let identity = dto.as_ref().and_then(|d| Identity::parse(&d.name).ok());
                    identity_store.set(IdentityState {
                        identity,
                        fetched: true,
                    });
                }
            }
            Some(Err(err)) => {
                tracing::error!(err);
                if !identity_store.read().fetched {
                    identity_store.set(IdentityState {
                        identity: None,
                        fetched: true,
                    });
                }
            }
            None => (),
        }
    }

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
