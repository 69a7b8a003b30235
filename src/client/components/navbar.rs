use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChessKnight, FaRightFromBracket};
use dioxus_free_icons::Icon;

use crate::client::{router::Route, store::identity::IdentityState};

#[component]
pub fn Navbar() -> Element {
    let identity_store = use_context::<Store<IdentityState>>();
    let name = identity_store.read().name().map(str::to_string);

    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        Icon { width: 20, height: 20, icon: FaChessKnight }
                        p { class: "text-xl", "Gunshi" }
                    }
                }
            }
            div {
                class: "navbar-center",
                if name.is_some() {
                    ul { class: "menu menu-horizontal gap-2",
                        li { Link { to: Route::MyOfficers {}, "所持武将" } }
                        li { Link { to: Route::MySkills {}, "所持戦法" } }
                        li { Link { to: Route::Formation { owner: String::new() }, "編成相談" } }
                    }
                }
            }
            div {
                class: "navbar-end",
                if let Some(name) = name {
                    div { class: "flex items-center gap-2",
                        p { "{name}" }
                        LogoutButton {}
                    }
                } else {
                    Link { to: Route::Login {}, class: "btn btn-primary", "ログイン" }
                }
            }
        }

        Outlet::<Route> {}
    }
}

#[component]
fn LogoutButton() -> Element {
    #[allow(unused_mut)]
    let mut identity_store = use_context::<Store<IdentityState>>();
    let navigator = use_navigator();

    rsx!(
        button {
            class: "btn btn-outline btn-sm flex gap-2",
            onclick: move |_| {
                #[cfg(feature = "web")]
                spawn(async move {
                    use dioxus_logger::tracing;

                    if let Err(err) = crate::client::api::clear_identity().await {
                        tracing::error!(err);
                        return;
                    }
                    identity_store.set(IdentityState { identity: None, fetched: true });
                    navigator.push(Route::Login {});
                });
            },
            Icon { width: 16, height: 16, icon: FaRightFromBracket }
            "ログアウト"
        }
    )
}
