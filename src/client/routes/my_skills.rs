use dioxus::prelude::*;

use gunshi::{
    model::roster::SkillDto,
    roster::{skill_categories, skill_ownership, skill_status, toggle_owned, SkillFilter},
};

use crate::client::components::{Notice, NoticeBanner, Page};

#[component]
pub fn MySkills() -> Element {
    #[allow(unused_mut)]
    let mut skills = use_signal(Vec::<SkillDto>::new);
    let mut filter = use_signal(SkillFilter::default);
    let mut selected = use_signal(|| None::<i32>);
    #[allow(unused_mut)]
    let mut notice = use_signal(|| None::<Notice>);
    #[allow(unused_mut)]
    let mut saving = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { crate::client::api::get_skills().await });

        use_effect(move || match &*future.read() {
            Some(Ok(catalog)) => skills.set(catalog.clone()),
            Some(Err(err)) => notice.set(Some(Notice::Error(err.clone()))),
            None => (),
        });
    }

    let categories = skill_categories(&skills.read());
    let visible: Vec<SkillDto> = skills
        .read()
        .iter()
        .filter(|s| filter.read().matches(s))
        .cloned()
        .collect();
    let detail = selected().and_then(|id| skills.read().iter().find(|s| s.id == id).cloned());

    let save = move |_| {
        let rows = skill_ownership(&skills.read());
        saving.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match crate::client::api::put_owned_skills(&rows).await {
                Ok(_) => notice.set(Some(Notice::Success("所持戦法を保存しました".to_string()))),
                Err(err) => notice.set(Some(Notice::Error(err))),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = rows;
    };

    rsx!(
        Title { "所持戦法 | Gunshi" }
        Page { heading: "所持戦法",
            NoticeBanner { notice }
            div { class: "flex flex-wrap gap-2 items-center mb-4",
                input {
                    class: "input input-bordered input-sm",
                    placeholder: "戦法名",
                    value: "{filter.read().name}",
                    oninput: move |event| filter.write().name = event.value(),
                }
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |event| {
                        let value = event.value();
                        filter.write().category = (!value.is_empty()).then_some(value);
                    },
                    option { value: "", "種類" }
                    {categories.iter().map(|c| rsx!(option { key: "{c}", value: "{c}", "{c}" }))}
                }
                button {
                    class: "btn btn-primary btn-sm",
                    disabled: saving(),
                    onclick: save,
                    "保存"
                }
            }
            div { class: "flex gap-4",
                table { class: "table table-sm flex-1",
                    thead {
                        tr {
                            th { "所持" }
                            th { "戦法" }
                            th { "種類" }
                            th { "状態" }
                        }
                    }
                    tbody {
                        {visible.into_iter().map(|skill| {
                            let id = skill.id;
                            let category = skill.category.clone().unwrap_or_default();
                            let status = skill_status(&skill).join("・");
                            rsx!(
                                tr { key: "{id}",
                                    td {
                                        input {
                                            r#type: "checkbox",
                                            class: "checkbox checkbox-sm",
                                            checked: skill.is_owned,
                                            disabled: saving(),
                                            onchange: move |_| toggle_owned(&mut skills.write(), id),
                                        }
                                    }
                                    td {
                                        button {
                                            class: "link",
                                            onclick: move |_| selected.set(Some(id)),
                                            "{skill.name}"
                                        }
                                    }
                                    td { "{category}" }
                                    td { "{status}" }
                                }
                            )
                        })}
                    }
                }
                if let Some(skill) = detail {
                    SkillDetail { skill }
                }
            }
        }
    )
}

#[component]
fn SkillDetail(skill: SkillDto) -> Element {
    let category = skill.category.clone().unwrap_or_else(|| "種類不明".to_string());
    let trigger = skill
        .trigger_rate
        .map(|rate| format!("{}%", rate))
        .unwrap_or_else(|| "-".to_string());
    let status = skill_status(&skill).join("・");
    let inheritors: Vec<String> = [skill.inherit1_name.clone(), skill.inherit2_name.clone()]
        .into_iter()
        .flatten()
        .collect();
    let inheritors = if inheritors.is_empty() {
        "-".to_string()
    } else {
        inheritors.join(" / ")
    };

    rsx!(
        div { class: "card bg-base-200 w-80",
            div { class: "card-body",
                h2 { class: "card-title", "{skill.name}" }
                p { "種類: {category}" }
                p { "発動率: {trigger}" }
                p { "状態: {status}" }
                p { "伝授武将: {inheritors}" }
                if let Some(description) = skill.description.clone() {
                    p { class: "whitespace-pre-wrap", "{description}" }
                }
            }
        }
    )
}
