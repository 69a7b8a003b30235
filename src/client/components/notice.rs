use dioxus::prelude::*;

/// Outcome of the last user action shown above a screen
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn error(message: impl ToString) -> Self {
        Self::Error(message.to_string())
    }
}

#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>) -> Element {
    let Some(current) = notice.read().clone() else {
        return rsx!();
    };

    let (class, message) = match current {
        Notice::Success(message) => ("notice notice-success", message),
        Notice::Error(message) => ("notice notice-error", message),
    };

    rsx!(
        div { class: "{class} flex justify-between items-center mb-4",
            p { "{message}" }
            button {
                class: "btn btn-ghost btn-sm",
                onclick: move |_| notice.set(None),
                "×"
            }
        }
    )
}
