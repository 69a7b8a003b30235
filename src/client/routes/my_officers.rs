use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMinus, FaPlus};
use dioxus_free_icons::Icon;

use gunshi::{
    model::roster::OfficerEntryDto,
    roster::{adjust_count, officer_counts, OfficerFilter, OfficerFilterOptions},
};

use crate::client::components::{Notice, NoticeBanner, Page};

#[component]
pub fn MyOfficers() -> Element {
    #[allow(unused_mut)]
    let mut entries = use_signal(Vec::<OfficerEntryDto>::new);
    let mut filter = use_signal(OfficerFilter::default);
    #[allow(unused_mut)]
    let mut notice = use_signal(|| None::<Notice>);
    #[allow(unused_mut)]
    let mut saving = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { crate::client::api::get_officers().await });

        use_effect(move || match &*future.read() {
            Some(Ok(catalog)) => entries.set(catalog.clone()),
            Some(Err(err)) => notice.set(Some(Notice::Error(err.clone()))),
            None => (),
        });
    }

    let options = OfficerFilterOptions::from_catalog(&entries.read());
    let owned = entries.read().iter().filter(|e| e.count > 0).count();
    let visible: Vec<OfficerEntryDto> = filter
        .read()
        .apply(&entries.read())
        .into_iter()
        .cloned()
        .collect();

    let save = move |_| {
        let counts = officer_counts(&entries.read());
        saving.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match crate::client::api::put_owned_officers(&counts).await {
                Ok(_) => notice.set(Some(Notice::Success("所持武将を保存しました".to_string()))),
                Err(err) => notice.set(Some(Notice::Error(err))),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = counts;
    };

    rsx!(
        Title { "所持武将 | Gunshi" }
        Page { heading: "所持武将",
            NoticeBanner { notice }
            div { class: "flex flex-wrap gap-2 items-center mb-4",
                input {
                    class: "input input-bordered input-sm",
                    placeholder: "武将名",
                    value: "{filter.read().name}",
                    oninput: move |event| filter.write().name = event.value(),
                }
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |event| filter.write().rarity = event.value().parse().ok(),
                    option { value: "", "レアリティ" }
                    {options.rarities.iter().map(|r| rsx!(option { key: "{r}", value: "{r}", "★{r}" }))}
                }
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |event| filter.write().cost = event.value().parse().ok(),
                    option { value: "", "コスト" }
                    {options.costs.iter().map(|c| rsx!(option { key: "{c}", value: "{c}", "{c}" }))}
                }
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |event| {
                        let value = event.value();
                        filter.write().faction = (!value.is_empty()).then_some(value);
                    },
                    option { value: "", "勢力" }
                    {options.factions.iter().map(|f| rsx!(option { key: "{f}", value: "{f}", "{f}" }))}
                }
                p { class: "text-sm", "所持: {owned}" }
                button {
                    class: "btn btn-primary btn-sm",
                    disabled: saving(),
                    onclick: save,
                    "保存"
                }
            }
            table { class: "table table-sm",
                thead {
                    tr {
                        th { "武将" }
                        th { "レアリティ" }
                        th { "コスト" }
                        th { "勢力" }
                        th { "所持数" }
                    }
                }
                tbody {
                    {visible.into_iter().map(|entry| {
                        let id = entry.officer.id;
                        let cost = entry.officer.cost.map(|c| c.to_string()).unwrap_or_default();
                        let faction = entry.officer.faction.clone().unwrap_or_default();
                        rsx!(
                            tr { key: "{id}",
                                td { "{entry.officer.name}" }
                                td { "★{entry.officer.rarity}" }
                                td { "{cost}" }
                                td { "{faction}" }
                                td {
                                    div { class: "flex items-center gap-2",
                                        button {
                                            class: "btn btn-ghost btn-xs",
                                            disabled: saving() || entry.count == 0,
                                            onclick: move |_| adjust_count(&mut entries.write(), id, -1),
                                            Icon { width: 12, height: 12, icon: FaMinus }
                                        }
                                        span { class: "w-6 text-center", "{entry.count}" }
                                        button {
                                            class: "btn btn-ghost btn-xs",
                                            disabled: saving(),
                                            onclick: move |_| adjust_count(&mut entries.write(), id, 1),
                                            Icon { width: 12, height: 12, icon: FaPlus }
                                        }
                                    }
                                }
                            }
                        )
                    })}
                }
            }
        }
    )
}
