//! Choosing which owner, advisor and label the formation screen opens on.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    formation::label::{default_label, sort_labels},
    model::{formation::FormationBoardDto, identity::Identity},
};

/// Query value selecting the viewer as owner
pub const OWNER_ME: &str = "me";

/// Owner the formation screen starts on.
///
/// `requested` comes from the `owner` query parameter. Requests for unlisted owners fall
/// back to the viewer, then to the first listed owner.
pub fn resolve_initial_owner(
    owners: &[String],
    requested: Option<&str>,
    viewer: &Identity,
) -> Option<String> {
    let listed = |name: &str| owners.iter().any(|o| o == name);

    match requested {
        Some(OWNER_ME) if listed(viewer.as_str()) => return Some(viewer.to_string()),
        Some(name) if name != OWNER_ME && listed(name) => return Some(name.to_string()),
        _ => {}
    }

    if listed(viewer.as_str()) {
        return Some(viewer.to_string());
    }
    owners.first().cloned()
}

/// Groups `(advisor, label)` rows of one owner into a board for `viewer`.
pub fn build_board(
    owner: &str,
    rows: impl IntoIterator<Item = (String, String)>,
    viewer: &Identity,
) -> FormationBoardDto {
    let mut labels: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (advisor, label) in rows {
        labels.entry(advisor).or_default().push(label);
    }
    labels.values_mut().for_each(sort_labels);

    let advisors: BTreeSet<String> = labels
        .keys()
        .cloned()
        .chain(std::iter::once(viewer.to_string()))
        .collect();

    FormationBoardDto {
        owner: owner.to_string(),
        advisors: advisors.into_iter().collect(),
        labels,
    }
}

/// Advisor tab to show: the previous selection while still listed, else the viewer.
pub fn initial_advisor(board: &FormationBoardDto, previous: Option<&str>, viewer: &Identity) -> String {
    previous
        .filter(|p| board.advisors.iter().any(|a| a == p))
        .map(str::to_string)
        .unwrap_or_else(|| viewer.to_string())
}

/// First label the advisor wrote, or the default label when there is none.
pub fn initial_label(board: &FormationBoardDto, advisor: &str) -> String {
    board
        .labels_for(advisor)
        .first()
        .cloned()
        .unwrap_or_else(default_label)
}

/// Adds `label` to the tabs of `advisor` after it was created or saved.
pub fn record_label(board: &mut FormationBoardDto, advisor: &str, label: &str) {
    if !board.advisors.iter().any(|a| a == advisor) {
        board.advisors.push(advisor.to_string());
        board.advisors.sort();
    }

    let labels = board.labels.entry(advisor.to_string()).or_default();
    if !labels.iter().any(|l| l == label) {
        labels.push(label.to_string());
        sort_labels(labels);
    }
}
