//! Generic id-keyed diff.
//!
//! # Algorithm
//! 1. Index the new entities by id (later entries overwrite earlier ones).
//! 2. Walk the old entities in order: no partner → `Removed`; partner →
//!    field-level changes decide `Modified` or `Unchanged`, and the partner
//!    id is marked processed.
//! 3. Walk the new entities in order: every unprocessed id → `Added`.
//!
//! Output keeps all old-side verdicts first, then added ones.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::field::{Diffable, FieldChange};

/// Verdict for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    /// Present only in the new schedule.
    Added,
    /// Present only in the old schedule.
    Removed,
    /// Present in both with at least one field change.
    Modified,
    /// Present in both with no field change.
    Unchanged,
}

impl ChangeStatus {
    /// Serialized name of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
            Self::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed verdict produced by [`diff_entities`].
#[derive(Debug, Clone)]
pub struct Verdict<'a, T: Diffable> {
    /// Outcome for this entity.
    pub status: ChangeStatus,
    /// Old-side entity; `None` for `Added`.
    pub old: Option<&'a T>,
    /// New-side entity; `None` for `Removed`.
    pub new: Option<&'a T>,
    /// Field changes; non-empty only for `Modified`.
    pub changes: Vec<FieldChange<T::Field>>,
}

impl<T: Diffable> Verdict<'_, T> {
    /// Id of the compared entity.
    pub fn id(&self) -> &str {
        self.old.or(self.new).map_or("", |e| e.id())
    }
}

/// Lists the fields of `old` and `new` that differ.
///
/// Fields in `ignore` are skipped. `tolerance_ms` applies to fields whose
/// rule is `TimeTolerance`.
pub fn detect_changes<T: Diffable>(
    old: &T,
    new: &T,
    ignore: &[T::Field],
    tolerance_ms: u64,
) -> Vec<FieldChange<T::Field>> {
    T::fields()
        .iter()
        .copied()
        .filter(|field| !ignore.contains(field))
        .filter_map(|field| {
            let old_value = old.field_value(field);
            let new_value = new.field_value(field);
            T::field_rule(field)
                .differs(&old_value, &new_value, tolerance_ms)
                .then_some(FieldChange {
                    field,
                    old_value,
                    new_value,
                })
        })
        .collect()
}

/// Diffs two entity collections keyed by id.
pub fn diff_entities<'a, T, I, J>(
    old: I,
    new: J,
    ignore: &[T::Field],
    tolerance_ms: u64,
) -> Vec<Verdict<'a, T>>
where
    T: Diffable + 'a,
    I: IntoIterator<Item = &'a T>,
    J: IntoIterator<Item = &'a T>,
{
    let new: Vec<&'a T> = new.into_iter().collect();
    let new_by_id: HashMap<&str, &'a T> = new.iter().map(|&e| (e.id(), e)).collect();
    let mut processed: HashSet<&str> = HashSet::new();
    let mut verdicts = Vec::new();

    for old_entity in old {
        match new_by_id.get(old_entity.id()) {
            None => verdicts.push(Verdict {
                status: ChangeStatus::Removed,
                old: Some(old_entity),
                new: None,
                changes: Vec::new(),
            }),
            Some(&new_entity) => {
                let changes = detect_changes(old_entity, new_entity, ignore, tolerance_ms);
                let status = if changes.is_empty() {
                    ChangeStatus::Unchanged
                } else {
                    ChangeStatus::Modified
                };
                verdicts.push(Verdict {
                    status,
                    old: Some(old_entity),
                    new: Some(new_entity),
                    changes,
                });
                processed.insert(new_entity.id());
            }
        }
    }

    for new_entity in new {
        if !processed.contains(new_entity.id()) {
            verdicts.push(Verdict {
                status: ChangeStatus::Added,
                old: None,
                new: Some(new_entity),
                changes: Vec::new(),
            });
        }
    }

    verdicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{FieldValue, ResourceField, TaskField};
    use crate::models::{Resource, Task, TaskType, MS_PER_HOUR, MS_PER_MINUTE};

    const H10: i64 = 10 * MS_PER_HOUR;
    const MINUTE: u64 = MS_PER_MINUTE as u64;

    fn task(id: &str, start: i64, end: i64) -> Task {
        Task::new(id, "R1", TaskType::Theory, start, end).with_content(format!("Task {id}"))
    }

    #[test]
    fn test_shifted_task_detected() {
        let old = task("1", H10, H10 + 2 * MS_PER_HOUR);
        let new = task("1", H10 + MS_PER_HOUR, H10 + 3 * MS_PER_HOUR);

        let changes = detect_changes(&old, &new, &[], 0);
        let fields: Vec<_> = changes.iter().map(|c| c.field).collect();
        assert_eq!(fields, vec![TaskField::Start, TaskField::End]);
        assert_eq!(changes[0].old_value, FieldValue::Timestamp(H10));
    }

    #[test]
    fn test_shift_within_tolerance() {
        let old = task("1", H10, H10 + 2 * MS_PER_HOUR);
        let new = task("1", H10 + MS_PER_HOUR, H10 + 3 * MS_PER_HOUR);

        assert!(detect_changes(&old, &new, &[], 90 * MINUTE).is_empty());
        // exactly at tolerance is not a change
        assert!(detect_changes(&old, &new, &[], 60 * MINUTE).is_empty());
        assert_eq!(detect_changes(&old, &new, &[], 59 * MINUTE).len(), 2);
    }

    #[test]
    fn test_ignored_fields_skipped() {
        let old = task("1", 0, 10).with_priority(1);
        let new = task("1", 0, 10).with_priority(2).with_content("Renamed");

        let changes = detect_changes(&old, &new, &[TaskField::Priority], 0);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, TaskField::Content);
    }

    #[test]
    fn test_optional_field_added() {
        let old = task("1", 0, 10);
        let new = task("1", 0, 10).with_course_name("CS Algorithms");

        let changes = detect_changes(&old, &new, &[], 0);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].old_value, FieldValue::Missing);
    }

    #[test]
    fn test_diff_order_old_then_added() {
        let old = vec![task("a", 0, 10), task("b", 0, 10), task("c", 0, 10)];
        let new = vec![task("d", 0, 10), task("c", 0, 20), task("a", 0, 10)];

        let verdicts = diff_entities(&old, &new, &[], 0);
        let summary: Vec<_> = verdicts.iter().map(|v| (v.id(), v.status)).collect();
        assert_eq!(
            summary,
            vec![
                ("a", ChangeStatus::Unchanged),
                ("b", ChangeStatus::Removed),
                ("c", ChangeStatus::Modified),
                ("d", ChangeStatus::Added),
            ]
        );
    }

    #[test]
    fn test_duplicate_new_ids_last_write_wins() {
        let old = vec![task("a", 0, 10)];
        let new = vec![task("a", 0, 99), task("a", 0, 10)];

        let verdicts = diff_entities(&old, &new, &[], 0);
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].status, ChangeStatus::Unchanged);
    }

    #[test]
    fn test_duplicate_old_ids_each_get_a_verdict() {
        let old = vec![task("a", 0, 10), task("a", 0, 20)];
        let new = vec![task("a", 0, 10)];

        let verdicts = diff_entities(&old, &new, &[], 0);
        let summary: Vec<_> = verdicts.iter().map(|v| (v.id(), v.status)).collect();
        assert_eq!(
            summary,
            vec![("a", ChangeStatus::Unchanged), ("a", ChangeStatus::Modified)]
        );
        assert_eq!(verdicts[1].old.map(|t| t.end), Some(20));
        assert_eq!(verdicts[1].new.map(|t| t.end), Some(10));
    }

    #[test]
    fn test_resource_diff() {
        let old = vec![
            Resource::instructor("1").with_name("Dr. Smith"),
            Resource::classroom("4").with_name("Room A101"),
        ];
        let new = vec![
            Resource::instructor("1").with_name("Dr. Smith"),
            Resource::laboratory("4").with_name("Room A101"),
        ];

        let verdicts = diff_entities(&old, &new, &[], 0);
        assert_eq!(verdicts[0].status, ChangeStatus::Unchanged);
        assert_eq!(verdicts[1].status, ChangeStatus::Modified);
        assert_eq!(verdicts[1].changes[0].field, ResourceField::ResourceType);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ChangeStatus::Modified.to_string(), "modified");
        assert_eq!(serde_json::to_value(ChangeStatus::Added).unwrap(), "added");
    }
}
