//! Time-overlap conflict detection.
//!
//! Finds pairs of tasks bound to the same resource whose intervals overlap.
//!
//! # Algorithm
//! 1. Group tasks by `group`, in order of first appearance.
//! 2. Skip groups whose resource is not part of the schedule.
//! 3. Stable-sort each group by start time.
//! 4. Report every overlapping pair `(i, j)`, `i < j`, with the shared
//!    interval `[max(starts), min(ends))`.
//!
//! Detection is pairwise: three mutually overlapping tasks yield three
//! conflicts. Tasks that only touch at an endpoint do not conflict.
//!
//! # Complexity
//! O(n log n + Σ k²) where k is the number of tasks on one resource.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::models::{Resource, Schedule, Task, TimeWindow};

/// A scheduling conflict on one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeConflict {
    /// Conflict classification.
    pub conflict_type: ConflictType,
    /// Resource carrying both tasks.
    pub resource_id: String,
    /// Resource display name.
    pub resource_name: String,
    /// The two conflicting tasks, earlier start first.
    pub conflicting_tasks: [Task; 2],
    /// Interval where both tasks are active.
    pub time_range: TimeWindow,
}

/// Classification of conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// Two tasks on one resource overlap in time.
    Overlap,
    /// The same session booked twice on one resource.
    DoubleBooking,
}

impl ConflictType {
    /// Serialized name of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overlap => "overlap",
            Self::DoubleBooking => "double_booking",
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TimeConflict {
    /// Creates an overlap conflict between two tasks on `resource`.
    ///
    /// Returns `None` if the tasks do not overlap.
    pub fn overlap(resource: &Resource, first: &Task, second: &Task) -> Option<Self> {
        let time_range = first.window().intersection(&second.window())?;
        Some(Self {
            conflict_type: ConflictType::Overlap,
            resource_id: resource.id.clone(),
            resource_name: resource.name.clone(),
            conflicting_tasks: [first.clone(), second.clone()],
            time_range,
        })
    }

    /// Whether a task takes part in this conflict.
    pub fn involves(&self, task_id: &str) -> bool {
        self.conflicting_tasks.iter().any(|t| t.id == task_id)
    }

    /// Display labels of the conflicting tasks.
    pub fn task_labels(&self) -> [&str; 2] {
        [
            self.conflicting_tasks[0].content.as_str(),
            self.conflicting_tasks[1].content.as_str(),
        ]
    }
}

/// Detects overlap conflicts among tasks sharing a resource.
pub fn detect_conflicts(schedule: &Schedule) -> Vec<TimeConflict> {
    let resources: HashMap<&str, &Resource> = schedule
        .resources
        .iter()
        .map(|r| (r.id.as_str(), r))
        .collect();

    let mut group_order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Task>> = HashMap::new();
    for task in &schedule.tasks {
        groups
            .entry(task.group.as_str())
            .or_insert_with(|| {
                group_order.push(task.group.as_str());
                Vec::new()
            })
            .push(task);
    }

    let mut conflicts = Vec::new();
    for resource_id in group_order {
        let Some(mut tasks) = groups.remove(resource_id) else {
            continue;
        };
        let Some(resource) = resources.get(resource_id) else {
            tracing::warn!(
                resource_id,
                tasks = tasks.len(),
                "skipping tasks bound to an unknown resource"
            );
            continue;
        };

        tasks.sort_by_key(|t| t.start);

        for (i, first) in tasks.iter().enumerate() {
            for second in &tasks[i + 1..] {
                if let Some(conflict) = TimeConflict::overlap(resource, first, second) {
                    tracing::trace!(
                        resource_id,
                        first = %first.id,
                        second = %second.id,
                        "overlap detected"
                    );
                    conflicts.push(conflict);
                }
            }
        }
    }

    tracing::debug!(
        schedule = %schedule.id,
        conflicts = conflicts.len(),
        "conflict detection finished"
    );
    conflicts
}
