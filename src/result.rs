//! Comparison result model.
//!
//! A [`ComparisonResult`] owns clones of every entity it reports on, so it
//! outlives the schedules it was computed from.

use serde::Serialize;

use crate::conflict::TimeConflict;
use crate::diff::{ChangeStatus, ResourceChange, TaskChange, TaskField, Verdict};
use crate::models::{Resource, Task};
use crate::statistics::ComparisonStatistics;

/// Verdict for one task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskComparison {
    pub task_id: String,
    pub status: ChangeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_task: Option<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_task: Option<Task>,
    /// Field changes; non-empty only for `Modified`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<TaskChange>,
}

/// Verdict for one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceComparison {
    pub resource_id: String,
    pub status: ChangeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_resource: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_resource: Option<Resource>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<ResourceChange>,
}

/// Aggregate counts of a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    /// Task verdicts carrying an old task.
    pub total_tasks_old: usize,
    /// Task verdicts carrying a new task.
    pub total_tasks_new: usize,
    pub tasks_added: usize,
    pub tasks_removed: usize,
    pub tasks_modified: usize,
    pub tasks_unchanged: usize,
    pub resources_added: usize,
    pub resources_removed: usize,
    pub resources_modified: usize,
    pub resources_unchanged: usize,
    pub conflicts_found: usize,
}

/// Full outcome of comparing two schedules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub summary: ComparisonSummary,
    pub tasks: Vec<TaskComparison>,
    pub resources: Vec<ResourceComparison>,
    pub conflicts: Vec<TimeConflict>,
    /// `None` when statistics were disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ComparisonStatistics>,
}

impl From<Verdict<'_, Task>> for TaskComparison {
    fn from(verdict: Verdict<'_, Task>) -> Self {
        Self {
            task_id: verdict.id().to_owned(),
            status: verdict.status,
            old_task: verdict.old.cloned(),
            new_task: verdict.new.cloned(),
            changes: verdict.changes,
        }
    }
}

impl From<Verdict<'_, Resource>> for ResourceComparison {
    fn from(verdict: Verdict<'_, Resource>) -> Self {
        Self {
            resource_id: verdict.id().to_owned(),
            status: verdict.status,
            old_resource: verdict.old.cloned(),
            new_resource: verdict.new.cloned(),
            changes: verdict.changes,
        }
    }
}

impl TaskComparison {
    /// Whether the start or end time changed.
    pub fn is_rescheduled(&self) -> bool {
        self.status == ChangeStatus::Modified && self.changes.iter().any(|c| c.field.is_time())
    }

    /// Whether a specific field changed.
    pub fn changed(&self, field: TaskField) -> bool {
        self.changes.iter().any(|c| c.field == field)
    }
}

impl ComparisonSummary {
    /// Counts verdicts and conflicts.
    pub fn tally(
        tasks: &[TaskComparison],
        resources: &[ResourceComparison],
        conflicts: &[TimeConflict],
    ) -> Self {
        let mut summary = Self {
            conflicts_found: conflicts.len(),
            ..Self::default()
        };

        for t in tasks {
            if t.old_task.is_some() {
                summary.total_tasks_old += 1;
            }
            if t.new_task.is_some() {
                summary.total_tasks_new += 1;
            }
            match t.status {
                ChangeStatus::Added => summary.tasks_added += 1,
                ChangeStatus::Removed => summary.tasks_removed += 1,
                ChangeStatus::Modified => summary.tasks_modified += 1,
                ChangeStatus::Unchanged => summary.tasks_unchanged += 1,
            }
        }

        for r in resources {
            match r.status {
                ChangeStatus::Added => summary.resources_added += 1,
                ChangeStatus::Removed => summary.resources_removed += 1,
                ChangeStatus::Modified => summary.resources_modified += 1,
                ChangeStatus::Unchanged => summary.resources_unchanged += 1,
            }
        }

        summary
    }

    /// Whether anything differs between the two schedules.
    pub fn has_changes(&self) -> bool {
        self.tasks_added
            + self.tasks_removed
            + self.tasks_modified
            + self.resources_added
            + self.resources_removed
            + self.resources_modified
            > 0
    }
}

impl ComparisonResult {
    /// Modified tasks whose start or end changed.
    pub fn rescheduled_tasks(&self) -> Vec<&TaskComparison> {
        self.tasks.iter().filter(|t| t.is_rescheduled()).collect()
    }

    /// Task verdicts with a given status.
    pub fn tasks_with_status(&self, status: ChangeStatus) -> Vec<&TaskComparison> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Resource verdicts with a given status.
    pub fn resources_with_status(&self, status: ChangeStatus) -> Vec<&ResourceComparison> {
        self.resources.iter().filter(|r| r.status == status).collect()
    }

    /// Verdict for a task id.
    pub fn task(&self, task_id: &str) -> Option<&TaskComparison> {
        self.tasks.iter().find(|t| t.task_id == task_id)
    }

    /// Verdict for a resource id.
    pub fn resource(&self, resource_id: &str) -> Option<&ResourceComparison> {
        self.resources.iter().find(|r| r.resource_id == resource_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::ScheduleComparator;
    use crate::fixtures::{fall_2024_v1, fall_2024_v2};

    #[test]
    fn test_tally_counts() {
        let result = ScheduleComparator::quick_compare(&fall_2024_v1(), &fall_2024_v2());
        let s = result.summary;

        assert_eq!(s.total_tasks_old, 3);
        assert_eq!(s.total_tasks_new, 4);
        assert_eq!(s.resources_unchanged, 4);
        assert!(s.has_changes());
        assert_eq!(
            s,
            ComparisonSummary::tally(&result.tasks, &result.resources, &result.conflicts)
        );
    }

    #[test]
    fn test_status_queries() {
        let result = ScheduleComparator::quick_compare(&fall_2024_v1(), &fall_2024_v2());

        let added: Vec<_> = result
            .tasks_with_status(ChangeStatus::Added)
            .into_iter()
            .map(|t| t.task_id.as_str())
            .collect();
        assert_eq!(added, vec!["4", "5"]);
        assert_eq!(result.resources_with_status(ChangeStatus::Added).len(), 1);
        assert!(result.task("3").unwrap().new_task.is_none());
        assert!(result.task("99").is_none());
    }

    #[test]
    fn test_rescheduled_excludes_content_only_changes() {
        let result = ScheduleComparator::quick_compare(&fall_2024_v1(), &fall_2024_v2());

        let rescheduled: Vec<_> = result
            .rescheduled_tasks()
            .into_iter()
            .map(|t| t.task_id.as_str())
            .collect();
        // task 2 only changed its label
        assert_eq!(rescheduled, vec!["1"]);
        assert!(result.task("2").unwrap().changed(TaskField::Content));
    }

    #[test]
    fn test_empty_summary_has_no_changes() {
        assert!(!ComparisonSummary::default().has_changes());
    }
}
