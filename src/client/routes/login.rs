use dioxus::prelude::*;

use crate::client::{
    components::{Notice, NoticeBanner, Page},
    router::Route,
    store::identity::IdentityState,
};

#[component]
pub fn Login() -> Element {
    #[allow(unused_mut)]
    let mut identity_store = use_context::<Store<IdentityState>>();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut users = use_signal(Vec::<String>::new);
    #[allow(unused_mut)]
    let mut notice = use_signal(|| None::<Notice>);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    // Names already in use, refetched as the search text changes
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let search = search.read().clone();
            crate::client::api::get_users(&search).await
        });

        match &*future.read_unchecked() {
            Some(Ok(found)) => {
                if *users.peek() != *found {
                    users.set(found.clone());
                }
            }
            Some(Err(err)) => {
                dioxus_logger::tracing::error!(err);
            }
            None => (),
        }
    }

    let submit = use_callback(move |chosen: String| {
        if chosen.trim().is_empty() {
            notice.set(Some(Notice::error("名前を入力してください")));
            return;
        }
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            use gunshi::model::identity::Identity;

            match crate::client::api::set_identity(&chosen).await {
                Ok(dto) => {
                    let identity = Identity::parse(&dto.name).ok();
                    identity_store.set(IdentityState {
                        identity,
                        fetched: true,
                    });
                    navigator.push(Route::MyOfficers {});
                }
                Err(err) => notice.set(Some(Notice::Error(err))),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = (chosen, navigator);
    });

    rsx!(
        Title { "ログイン | Gunshi" }
        Page { class: "flex justify-center", heading: "ログイン",
            div { class: "flex flex-col gap-4 w-full max-w-96",
                NoticeBanner { notice }
                form {
                    class: "flex gap-2",
                    onsubmit: move |event| {
                        event.prevent_default();
                        submit.call(name.read().clone());
                    },
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "表示名",
                        value: "{name}",
                        oninput: move |event| name.set(event.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        "ログイン"
                    }
                }
                div { class: "flex flex-col gap-2",
                    h2 { class: "text-lg", "登録済みの名前" }
                    input {
                        class: "input input-bordered input-sm",
                        placeholder: "名前で検索",
                        value: "{search}",
                        oninput: move |event| search.set(event.value()),
                    }
                    ul { class: "menu bg-base-200 rounded-box",
                        {users.iter().map(|user| {
                            let user = user.clone();
                            rsx!(
                                li { key: "{user}",
                                    button {
                                        disabled: submitting(),
                                        onclick: move |_| submit.call(user.clone()),
                                        "{user}"
                                    }
                                }
                            )
                        })}
                    }
                }
            }
        }
    )
}
