use dioxus::prelude::*;

use crate::client::{router::Route, store::identity::IdentityState};

/// Sends visitors without a chosen name to the login screen
#[component]
pub fn IdentityLayout() -> Element {
    let identity_store = use_context::<Store<IdentityState>>();
    let navigator = use_navigator();

    let state = identity_store.read().clone();

    use_effect(move || {
        let state = identity_store.read();
        if state.fetched && state.identity.is_none() {
            navigator.replace(Route::Login {});
        }
    });

    rsx!(
        if state.identity.is_some() {
            Outlet::<Route> {}
        } else {
            div { class: "min-h-screen pt-[64px] flex justify-center items-center",
                span { class: "loading loading-spinner" }
            }
        }
    )
}
