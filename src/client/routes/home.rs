use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::identity::IdentityState};

#[component]
pub fn Home() -> Element {
    let identity_store = use_context::<Store<IdentityState>>();
    let state = identity_store.read().clone();

    rsx!(
        Title { "Gunshi" }
        Meta {
            name: "description",
            content: "Formation consultation for guild members: register your officers and skills, ask for formations, answer others."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256",
                p { class: "text-2xl", "Gunshi" }
                p { "所持している武将と戦法を登録すると、他のメンバーがあなたのための編成を提案できます。" }
                ul { class: "flex flex-wrap justify-center gap-2",
                    if state.identity.is_some() {
                        li { Link { to: Route::MyOfficers {}, class: "btn btn-primary w-40", "所持武将を登録" } }
                        li { Link { to: Route::MySkills {}, class: "btn btn-primary w-40", "所持戦法を登録" } }
                        li { Link { to: Route::Formation { owner: String::new() }, class: "btn btn-secondary w-40", "編成相談" } }
                    } else if state.fetched {
                        li { Link { to: Route::Login {}, class: "btn btn-primary w-40", "ログイン" } }
                    }
                    li {
                        a { href: "/api/docs",
                            button { class: "btn btn-outline w-40", "API Docs" }
                        }
                    }
                }
                p { class: "text-sm opacity-70",
                    "名前は認証されません。同じ名前を使うと同じデータを共有します。"
                }
            }
        }
    )
}
