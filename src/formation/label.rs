//! Formation labels of the form `編成{n}`.

use std::{cmp::Ordering, collections::BTreeSet};

use crate::formation::error::FormationError;

pub const LABEL_PREFIX: &str = "編成";

/// Maximum number of labels an advisor may write for a single owner.
pub const MAX_FORMATIONS: usize = 5;

/// Label used when an advisor has nothing written yet.
pub fn default_label() -> String {
    format_label(1)
}

pub fn format_label(index: u32) -> String {
    format!("{LABEL_PREFIX}{index}")
}

/// Numeric suffix of a label, `None` when it does not follow the `編成{n}` form.
pub fn label_index(label: &str) -> Option<u32> {
    label.strip_prefix(LABEL_PREFIX)?.parse().ok()
}

/// True for `編成1` through `編成5`.
pub fn is_valid_label(label: &str) -> bool {
    match label_index(label) {
        Some(i) => (1..=MAX_FORMATIONS as u32).contains(&i) && format_label(i) == label,
        None => false,
    }
}

/// Orders `編成{n}` labels by suffix, ahead of any label without one.
///
/// Labels without a suffix follow in code point order. The order is total, so
/// mixed lists sort consistently.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

fn sort_key(label: &str) -> (bool, Option<u32>, &str) {
    let index = label_index(label);
    (index.is_none(), index, label)
}

/// Removes duplicate labels and sorts the rest with [`compare_labels`].
pub fn sort_labels(labels: &mut Vec<String>) {
    let distinct: BTreeSet<String> = labels.drain(..).collect();
    labels.extend(distinct);
    labels.sort_by(|a, b| compare_labels(a, b));
}

/// Lowest unused positive suffix among `existing`.
///
/// Labels that do not follow the `編成{n}` form still count towards the cap.
pub fn next_label<S: AsRef<str>>(existing: &[S]) -> Result<String, FormationError> {
    let distinct: BTreeSet<&str> = existing.iter().map(AsRef::as_ref).collect();
    if distinct.len() >= MAX_FORMATIONS {
        return Err(FormationError::FormationLimitReached);
    }

    let used: BTreeSet<u32> = distinct.iter().filter_map(|l| label_index(l)).collect();
    let next = (1..).find(|n| !used.contains(n)).unwrap_or(1);

    Ok(format_label(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(indices: &[u32]) -> Vec<String> {
        indices.iter().map(|i| format_label(*i)).collect()
    }

    /// Expect the smallest missing suffix to be chosen
    #[test]
    fn next_label_fills_first_gap() {
        assert_eq!(next_label(&labels(&[1, 2, 4])), Ok("編成3".to_string()));
        assert_eq!(next_label(&labels(&[1, 3])), Ok("編成2".to_string()));
        assert_eq!(next_label(&labels(&[2, 3])), Ok("編成1".to_string()));
    }

    /// Expect 編成1 when no labels exist yet
    #[test]
    fn next_label_starts_at_one() {
        assert_eq!(next_label::<String>(&[]), Ok("編成1".to_string()));
    }

    /// Expect an error once five labels exist
    #[test]
    fn next_label_is_capped() {
        assert_eq!(
            next_label(&labels(&[1, 2, 3, 4, 5])),
            Err(FormationError::FormationLimitReached)
        );
        assert_eq!(next_label(&labels(&[1, 2, 3, 4])), Ok("編成5".to_string()));
    }

    #[test]
    fn labels_sort_numerically() {
        let mut list = vec![
            "編成10".to_string(),
            "編成2".to_string(),
            "編成1".to_string(),
            "編成2".to_string(),
        ];
        sort_labels(&mut list);

        assert_eq!(list, vec!["編成1", "編成2", "編成10"]);
    }

    #[test]
    fn valid_labels_are_within_cap() {
        assert!(is_valid_label("編成1"));
        assert!(is_valid_label("編成5"));
        assert!(!is_valid_label("編成0"));
        assert!(!is_valid_label("編成6"));
        assert!(!is_valid_label("編成01"));
        assert!(!is_valid_label("Formation 1"));
    }

    /// Expect labels without a numeric suffix after numbered ones, in string order
    #[test]
    fn unparsable_labels_sort_after_numbered() {
        assert_eq!(compare_labels("編成x", "編成1"), Ordering::Greater);
        assert_eq!(compare_labels("編成1x", "編成10"), Ordering::Greater);
        assert_eq!(compare_labels("相談用", "編成x"), "相談用".cmp("編成x"));
        assert_eq!(label_index("Formation 1"), None);
    }

    /// Expect duplicates in a mixed list to collapse whatever their position
    #[test]
    fn mixed_labels_dedup_and_sort() {
        let mut list: Vec<String> = ["編成2", "編成1x", "編成10", "編成2", "編成1x", "編成10", "編成2"]
            .iter()
            .map(|l| l.to_string())
            .collect();
        sort_labels(&mut list);

        assert_eq!(list, vec!["編成2", "編成10", "編成1x"]);
    }
}
