use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, heading: Option<String>, children: Element) -> Element {
    let class: &str = class.unwrap_or("");

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            if let Some(heading) = heading {
                h1 { class: "text-2xl font-bold mb-4", "{heading}" }
            }
            {children}
        }
    )
}
