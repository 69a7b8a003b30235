use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCopy, FaFloppyDisk, FaPlus};
use dioxus_free_icons::Icon;

use gunshi::{
    formation::{
        board::record_label, editor::FormationEditor, error::FormationError, share::format_for_copy,
    },
    model::{
        formation::{FormationBoardDto, FormationKey, SkillSlot, SlotPosition},
        identity::Identity,
        roster::RosterDto,
    },
    roster::{selectable_skills, skill_option_label, RosterIndex},
};

use crate::client::{
    components::{Notice, NoticeBanner, Page},
    store::identity::IdentityState,
    util::clipboard::copy_to_clipboard,
};

/// Formation consultation screen, `owner` is `me`, a member name or empty
#[component]
pub fn Formation(owner: String) -> Element {
    let identity_store = use_context::<Store<IdentityState>>();
    let Some(viewer) = identity_store.read().identity.clone() else {
        return rsx!();
    };

    rsx!(
        Title { "編成相談 | Gunshi" }
        FormationScreen { viewer, requested_owner: owner }
    )
}

fn parse_option(value: &str) -> Option<i32> {
    value.parse().ok()
}

#[component]
fn FormationScreen(viewer: Identity, requested_owner: String) -> Element {
    let mut editor = use_signal(|| FormationEditor::new(viewer.clone()));
    #[allow(unused_mut)]
    let mut owners = use_signal(Vec::<String>::new);
    let mut owner = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut roster = use_signal(|| None::<RosterDto>);
    let mut board = use_signal(|| None::<FormationBoardDto>);
    let mut advisor = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<Notice>);

    let select = use_callback(move |key: FormationKey| {
        editor.write().begin_load(key.clone());

        #[cfg(feature = "web")]
        spawn(async move {
            use gunshi::formation::editor::FormationGateway;

            let result = crate::client::api::ApiGateway.load(&key).await;
            match editor.write().finish_load(&key, result) {
                Ok(()) | Err(FormationError::StaleResponse) => {}
                Err(err) => notice.set(Some(Notice::error(err))),
            }
        });
    });

    #[cfg(feature = "web")]
    {
        use gunshi::formation::board::{initial_advisor, initial_label, resolve_initial_owner};

        use crate::client::api;

        let requested = requested_owner.clone();
        let owner_viewer = viewer.clone();
        let owners_future = use_resource(|| async move { api::get_owners().await });

        use_effect(move || match &*owners_future.read() {
            Some(Ok(list)) => {
                owners.set(list.clone());
                if owner.peek().is_none() {
                    let requested = (!requested.is_empty()).then_some(requested.as_str());
                    owner.set(resolve_initial_owner(list, requested, &owner_viewer));
                }
            }
            Some(Err(err)) => notice.set(Some(Notice::Error(err.clone()))),
            None => (),
        });

        // Roster first; a failure stops the board from loading
        let owner_future = use_resource(move || async move {
            let Some(name) = owner() else {
                return Ok(None);
            };
            let roster = api::get_roster(&name).await?;
            let board = api::get_board(&name).await?;

            Ok::<_, String>(Some((roster, board)))
        });

        let board_viewer = viewer.clone();
        use_effect(move || match &*owner_future.read() {
            Some(Ok(Some((loaded_roster, loaded_board)))) => {
                let chosen = initial_advisor(loaded_board, advisor.peek().as_deref(), &board_viewer);
                let label = initial_label(loaded_board, &chosen);

                roster.set(Some(loaded_roster.clone()));
                board.set(Some(loaded_board.clone()));
                advisor.set(Some(chosen.clone()));

                match (Identity::parse(&loaded_board.owner), Identity::parse(&chosen)) {
                    (Ok(owner), Ok(advisor)) => select.call(FormationKey::new(owner, advisor, label)),
                    _ => notice.set(Some(Notice::error("Invalid member name"))),
                }
            }
            Some(Err(err)) => notice.set(Some(Notice::Error(err.clone()))),
            _ => (),
        });
    }

    let choose_advisor = use_callback(move |name: String| {
        let Some(current) = board.read().clone() else {
            return;
        };
        let label = gunshi::formation::board::initial_label(&current, &name);
        advisor.set(Some(name.clone()));

        if let (Ok(owner), Ok(advisor)) = (Identity::parse(&current.owner), Identity::parse(&name)) {
            select.call(FormationKey::new(owner, advisor, label));
        }
    });

    let add_formation = move |_| {
        let (Some(current), Some(name)) = (board.read().clone(), advisor.read().clone()) else {
            return;
        };
        let (Ok(owner), Ok(chosen)) = (Identity::parse(&current.owner), Identity::parse(&name)) else {
            return;
        };

        let added = editor
            .write()
            .add_formation(owner, &chosen, current.labels_for(&name));
        match added {
            Ok(key) => {
                if let Some(board) = board.write().as_mut() {
                    record_label(board, key.advisor.as_str(), &key.label);
                }
            }
            Err(err) => notice.set(Some(Notice::error(err))),
        }
    };

    let save = move |_| {
        let request = editor.write().begin_save();
        let (key, formation) = match request {
            Ok(request) => request,
            Err(err) => {
                notice.set(Some(Notice::error(err)));
                return;
            }
        };

        #[cfg(feature = "web")]
        spawn(async move {
            use gunshi::formation::editor::FormationGateway;

            let result = crate::client::api::ApiGateway.save(&key, &formation).await;
            match editor.write().finish_save(result) {
                Ok(saved) => {
                    if let Some(board) = board.write().as_mut() {
                        record_label(board, key.advisor.as_str(), &saved.label);
                    }
                    notice.set(Some(Notice::Success(format!("{} を保存しました", saved.label))));
                }
                Err(err) => notice.set(Some(Notice::error(err))),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = (key, formation);
    };

    let copy = move |_| {
        let text = {
            let editor = editor.read();
            let (Some(open), Some(loaded)) = (editor.open(), roster.read().as_ref().map(RosterIndex::from)) else {
                return;
            };
            format_for_copy(open, &loaded)
        };

        spawn(async move {
            match copy_to_clipboard(text).await {
                Ok(()) => notice.set(Some(Notice::Success("コピーしました".to_string()))),
                Err(err) => notice.set(Some(Notice::Error(err))),
            }
        });
    };

    let owner_list = owners.read().clone();
    let current_owner = owner.read().clone();
    let current_board = board.read().clone();
    let current_advisor = advisor.read().clone();
    let busy = editor.read().is_busy();
    let can_edit = editor.read().can_edit();
    let open = editor.read().open().cloned();

    rsx!(
        Page { heading: "編成相談",
            NoticeBanner { notice }
            div { class: "flex gap-2 items-center mb-4",
                label { "相談者" }
                select {
                    class: "select select-bordered select-sm",
                    disabled: busy,
                    onchange: move |event| {
                        let value = event.value();
                        board.set(None);
                        owner.set((!value.is_empty()).then_some(value));
                    },
                    {owner_list.iter().map(|name| {
                        let selected = current_owner.as_deref() == Some(name.as_str());
                        rsx!(option { key: "{name}", value: "{name}", selected, "{name}" })
                    })}
                }
            }
            if owner_list.is_empty() {
                p { "所持武将を登録したメンバーがまだいません。" }
            }
            if let Some(current) = current_board {
                div { class: "tabs tabs-boxed mb-2",
                    {current.advisors.iter().map(|name| {
                        let active = current_advisor.as_deref() == Some(name.as_str());
                        let class = if active { "tab tab-active" } else { "tab" };
                        let name = name.clone();
                        rsx!(
                            button {
                                key: "{name}",
                                class,
                                disabled: busy,
                                onclick: move |_| choose_advisor.call(name.clone()),
                                "{name}"
                            }
                        )
                    })}
                }
                if let Some(name) = current_advisor.clone() {
                    div { class: "flex gap-2 items-center mb-4",
                        {current.labels_for(&name).iter().map(|label| {
                            let active = open.as_ref().is_some_and(|o| &o.key.label == label);
                            let class = if active { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" };
                            let key = match (Identity::parse(&current.owner), Identity::parse(&name)) {
                                (Ok(owner), Ok(advisor)) => Some(FormationKey::new(owner, advisor, label.clone())),
                                _ => None,
                            };
                            rsx!(
                                button {
                                    key: "{label}",
                                    class,
                                    disabled: busy || key.is_none(),
                                    onclick: move |_| {
                                        if let Some(key) = key.clone() {
                                            select.call(key);
                                        }
                                    },
                                    "{label}"
                                }
                            )
                        })}
                        if name == viewer.as_str() {
                            button {
                                class: "btn btn-sm btn-ghost flex gap-1",
                                disabled: busy,
                                onclick: add_formation,
                                Icon { width: 12, height: 12, icon: FaPlus }
                                "編成を追加"
                            }
                        }
                    }
                }
            }
            if let Some(open) = open {
                div { class: "flex flex-col gap-4",
                    p { class: "text-sm opacity-70",
                        "{open.key.owner} さん宛 {open.key.label} / 編成者: {open.key.advisor}"
                        if !can_edit { " （閲覧のみ）" }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        {SlotPosition::ALL.into_iter().map(|position| rsx!(
                            SlotEditor {
                                key: "{position}",
                                editor,
                                roster,
                                notice,
                                position,
                                disabled: busy || !can_edit,
                            }
                        ))}
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        label { class: "flex flex-col gap-1",
                            "依頼者コメント"
                            textarea {
                                class: "textarea textarea-bordered",
                                disabled: busy || !can_edit,
                                value: "{open.request_comment}",
                                oninput: move |event| {
                                    if let Err(err) = editor.write().set_request_comment(event.value()) {
                                        notice.set(Some(Notice::error(err)));
                                    }
                                },
                            }
                        }
                        label { class: "flex flex-col gap-1",
                            "回答者コメント"
                            textarea {
                                class: "textarea textarea-bordered",
                                disabled: busy || !can_edit,
                                value: "{open.answer_comment}",
                                oninput: move |event| {
                                    if let Err(err) = editor.write().set_answer_comment(event.value()) {
                                        notice.set(Some(Notice::error(err)));
                                    }
                                },
                            }
                        }
                    }
                    div { class: "flex gap-2",
                        button {
                            class: "btn btn-primary flex gap-2",
                            disabled: busy || !can_edit,
                            onclick: save,
                            Icon { width: 16, height: 16, icon: FaFloppyDisk }
                            "保存"
                        }
                        button {
                            class: "btn btn-outline flex gap-2",
                            disabled: busy,
                            onclick: copy,
                            Icon { width: 16, height: 16, icon: FaCopy }
                            "テキストをコピー"
                        }
                    }
                }
            } else if busy {
                span { class: "loading loading-spinner" }
            }
        }
    )
}

#[component]
fn SlotEditor(
    editor: Signal<FormationEditor>,
    roster: Signal<Option<RosterDto>>,
    mut notice: Signal<Option<Notice>>,
    position: SlotPosition,
    disabled: bool,
) -> Element {
    let slot = editor
        .read()
        .open()
        .map(|open| *open.slots.get(position))
        .unwrap_or_default();
    let loaded = roster.read().clone().unwrap_or_else(|| RosterDto {
        owner: String::new(),
        officers: Vec::new(),
        skills: Vec::new(),
    });
    let skills: Vec<(i32, String)> = selectable_skills(&loaded.skills)
        .into_iter()
        .map(|s| (s.id, skill_option_label(s)))
        .collect();

    let officer_value = slot.officer_id.map(|id| id.to_string()).unwrap_or_default();
    let selected_officer = loaded
        .officers
        .iter()
        .find(|o| Some(o.id) == slot.officer_id)
        .cloned();

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title", "{position.label()}" }
                select {
                    class: "select select-bordered select-sm",
                    disabled,
                    value: "{officer_value}",
                    onchange: move |event| {
                        if let Err(err) = editor.write().set_officer(position, parse_option(&event.value())) {
                            notice.set(Some(Notice::error(err)));
                        }
                    },
                    option { value: "", "武将を選択" }
                    {loaded.officers.iter().map(|officer| {
                        let selected = slot.officer_id == Some(officer.id);
                        rsx!(option { key: "{officer.id}", value: "{officer.id}", selected, "★{officer.rarity} {officer.name}" })
                    })}
                }
                if let Some(inherent) = selected_officer.and_then(|o| o.inherent_skill_name) {
                    p { class: "text-sm", "固有：{inherent}" }
                }
                {[SkillSlot::First, SkillSlot::Second].into_iter().map(|skill_slot| {
                    let current = slot.skill(skill_slot);
                    let value = current.map(|id| id.to_string()).unwrap_or_default();
                    let name = match skill_slot {
                        SkillSlot::First => "伝授戦法1",
                        SkillSlot::Second => "伝授戦法2",
                    };
                    rsx!(
                        select {
                            key: "{name}",
                            class: "select select-bordered select-sm",
                            disabled,
                            value: "{value}",
                            onchange: move |event| {
                                let chosen = parse_option(&event.value());
                                if let Err(err) = editor.write().set_inherited_skill(position, skill_slot, chosen) {
                                    notice.set(Some(Notice::error(err)));
                                }
                            },
                            option { value: "", "{name}" }
                            {skills.iter().map(|(id, label)| {
                                let selected = current == Some(*id);
                                rsx!(option { key: "{id}", value: "{id}", selected, "{label}" })
                            })}
                        }
                    )
                })}
            }
        }
    )
}
