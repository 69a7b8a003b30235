use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Gunshi" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-xl", "/{path} は見つかりません" }
            Link { to: Route::Home {}, class: "btn btn-outline", "トップへ戻る" }
        }
    )
}
