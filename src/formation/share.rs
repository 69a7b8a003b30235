//! Plain text rendering of a formation for pasting into chat.

use crate::{formation::editor::OpenFormation, roster::RosterIndex};

const MISSING_OFFICER: &str = "（武将未設定）";

/// Renders `formation` as shareable text, resolving ids through `index`.
///
/// Positions without an officer and without inherited skills are left out, as are empty
/// comments.
pub fn format_for_copy(formation: &OpenFormation, index: &RosterIndex) -> String {
    let mut lines = vec![
        format!("【{} さん宛 {}】", formation.key.owner, formation.key.label),
        format!("編成者: {}", formation.key.advisor),
        String::new(),
    ];

    for (position, slot) in formation.slots.iter() {
        if slot.is_empty() {
            continue;
        }

        let officer = slot.officer_id.and_then(|id| index.officer(id));
        let mut parts = vec![format!(
            "{}: {}",
            position.label(),
            officer.map_or(MISSING_OFFICER, |o| o.name.as_str())
        )];

        if let Some(inherent) = officer.and_then(|o| o.inherent_skill_name.as_deref()) {
            if !inherent.is_empty() {
                parts.push(format!("固有：{inherent}"));
            }
        }

        let inherited: Vec<&str> = [slot.inherit1_id, slot.inherit2_id]
            .into_iter()
            .flatten()
            .filter_map(|id| index.skill(id))
            .map(|s| s.name.as_str())
            .collect();
        if !inherited.is_empty() {
            parts.push(format!("伝授：{}", inherited.join(" / ")));
        }

        lines.push(format!("- {}", parts.join(" ｜ ")));
    }

    if !formation.request_comment.is_empty() {
        lines.push(String::new());
        lines.push(format!("依頼者コメント：{}", formation.request_comment));
    }
    if !formation.answer_comment.is_empty() {
        lines.push(String::new());
        lines.push(format!("回答者コメント：{}", formation.answer_comment));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{formation::FormationKey, identity::Identity},
        roster::fixtures::{officer, skill},
    };

    fn formation(owner: &str, advisor: &str) -> OpenFormation {
        OpenFormation::fresh(FormationKey::new(
            Identity::parse(owner).unwrap(),
            Identity::parse(advisor).unwrap(),
            "編成1",
        ))
    }

    fn index() -> RosterIndex {
        let mut nobunaga = officer(1, "Nobunaga", 5, Some(7));
        nobunaga.inherent_skill_name = Some("Atsumori".to_string());
        let hideyoshi = officer(2, "Hideyoshi", 5, Some(6));

        RosterIndex::new(
            [nobunaga, hideyoshi],
            [
                skill(10, "Kachidoki", Some("Nobunaga"), None),
                skill(11, "Teppo", None, Some("Ieyasu")),
            ],
        )
    }

    /// Expect header, advisor line and one line for the leader
    #[test]
    fn formats_leader_with_inherent_and_inherited_skill() {
        let mut open = formation("Alice", "Bob");
        open.slots.leader.officer_id = Some(1);
        open.slots.leader.inherit1_id = Some(10);

        let text = format_for_copy(&open, &index());

        assert_eq!(
            text,
            "【Alice さん宛 編成1】\n編成者: Bob\n\n- 主将: Nobunaga ｜ 固有：Atsumori ｜ 伝授：Kachidoki"
        );
    }

    /// Expect positions holding only skills to show a placeholder officer
    #[test]
    fn marks_missing_officer_and_joins_two_skills() {
        let mut open = formation("Alice", "Alice");
        open.slots.sub2.inherit1_id = Some(10);
        open.slots.sub2.inherit2_id = Some(11);
        open.slots.sub1.officer_id = Some(2);

        let text = format_for_copy(&open, &index());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[3], "- 副将1: Hideyoshi");
        assert_eq!(lines[4], "- 副将2: （武将未設定） ｜ 伝授：Kachidoki / Teppo");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn appends_comments_after_blank_lines() {
        let mut open = formation("Alice", "Bob");
        open.request_comment = "PvP向け".to_string();
        open.answer_comment = "騎馬で".to_string();

        let text = format_for_copy(&open, &index());

        assert!(text.ends_with("\n\n依頼者コメント：PvP向け\n\n回答者コメント：騎馬で"));
    }
}
