//! Utilization and task-mix statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Utilization | Sum of task durations on a resource, in hours |
//! | Utilization change | new utilization - old utilization |
//! | Task-type distribution | Task count per `TaskType`, per side |
//!
//! Utilization is reported for the union of both schedules' resource ids.
//! A resource without tasks on one side reports 0 for that side. Task types
//! with no tasks are absent from the distribution.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Schedule, Task, TaskType};

/// Utilization of one resource in both schedules (hours).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtilizationChange {
    /// Scheduled hours in the old schedule.
    pub old_utilization: f64,
    /// Scheduled hours in the new schedule.
    pub new_utilization: f64,
    /// `new_utilization - old_utilization`.
    pub change: f64,
}

/// Task counts by type for both schedules.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskTypeDistribution {
    pub old: BTreeMap<TaskType, usize>,
    pub new: BTreeMap<TaskType, usize>,
}

/// Comparison statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonStatistics {
    /// Per-resource utilization, keyed by resource id.
    pub utilization_changes_by_resource: BTreeMap<String, UtilizationChange>,
    /// Task-type mix of both schedules.
    pub task_type_distribution: TaskTypeDistribution,
}

impl UtilizationChange {
    /// Creates a change record from both sides.
    pub fn new(old_utilization: f64, new_utilization: f64) -> Self {
        Self {
            old_utilization,
            new_utilization,
            change: new_utilization - old_utilization,
        }
    }
}

impl ComparisonStatistics {
    /// Computes statistics over every task of both schedules.
    pub fn calculate(old: &Schedule, new: &Schedule) -> Self {
        let old_hours = hours_by_resource(&old.tasks);
        let new_hours = hours_by_resource(&new.tasks);

        let utilization_changes_by_resource = old
            .resources
            .iter()
            .chain(&new.resources)
            .map(|r| {
                let old_util = old_hours.get(r.id.as_str()).copied().unwrap_or(0.0);
                let new_util = new_hours.get(r.id.as_str()).copied().unwrap_or(0.0);
                (r.id.clone(), UtilizationChange::new(old_util, new_util))
            })
            .collect();

        Self {
            utilization_changes_by_resource,
            task_type_distribution: TaskTypeDistribution {
                old: task_type_distribution(&old.tasks),
                new: task_type_distribution(&new.tasks),
            },
        }
    }

    /// Utilization record for a resource.
    pub fn utilization(&self, resource_id: &str) -> Option<&UtilizationChange> {
        self.utilization_changes_by_resource.get(resource_id)
    }

    /// Net change in scheduled hours across all resources.
    pub fn total_change_hours(&self) -> f64 {
        self.utilization_changes_by_resource
            .values()
            .map(|u| u.change)
            .sum()
    }
}

/// Scheduled hours per resource id.
fn hours_by_resource(tasks: &[Task]) -> HashMap<&str, f64> {
    let mut hours: HashMap<&str, f64> = HashMap::new();
    for task in tasks {
        *hours.entry(task.group.as_str()).or_insert(0.0) += task.duration_hours();
    }
    hours
}

/// Task count per type. Absent types are omitted.
pub fn task_type_distribution(tasks: &[Task]) -> BTreeMap<TaskType, usize> {
    let mut distribution = BTreeMap::new();
    for task in tasks {
        *distribution.entry(task.task_type).or_insert(0) += 1;
    }
    distribution
}
