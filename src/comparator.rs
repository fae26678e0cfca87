//! Schedule comparator.
//!
//! Runs the stages in dependency order: task diff → resource diff →
//! conflict detection (new schedule only) → summary → statistics.
//!
//! # Usage
//! ```
//! use schedule_compare::{ComparisonOptions, ScheduleComparator, Schedule};
//!
//! let old = Schedule::new("s1", "Fall 2024", "1.0");
//! let new = Schedule::new("s2", "Fall 2024", "2.0");
//! let comparator = ScheduleComparator::new(ComparisonOptions::new().with_time_tolerance_minutes(5));
//! let result = comparator.compare(&old, &new);
//! assert!(!result.summary.has_changes());
//! ```

use crate::conflict::detect_conflicts;
use crate::diff::diff_entities;
use crate::models::Schedule;
use crate::options::ComparisonOptions;
use crate::result::{ComparisonResult, ComparisonSummary, ResourceComparison, TaskComparison};
use crate::statistics::ComparisonStatistics;

/// Compares schedule snapshots under a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct ScheduleComparator {
    options: ComparisonOptions,
}

impl ScheduleComparator {
    /// Creates a comparator.
    pub fn new(options: ComparisonOptions) -> Self {
        Self { options }
    }

    /// Compares with default options.
    pub fn quick_compare(old: &Schedule, new: &Schedule) -> ComparisonResult {
        Self::default().compare(old, new)
    }

    /// The options in effect.
    pub fn options(&self) -> &ComparisonOptions {
        &self.options
    }

    /// Compares `old` against `new`.
    ///
    /// Pure and deterministic: neither schedule is modified and repeated
    /// calls yield equal results.
    pub fn compare(&self, old: &Schedule, new: &Schedule) -> ComparisonResult {
        let opts = &self.options;

        let tasks: Vec<TaskComparison> = diff_entities(
            old.tasks.iter().filter(|t| opts.in_date_range(t)),
            new.tasks.iter().filter(|t| opts.in_date_range(t)),
            &opts.ignore_fields,
            opts.tolerance_ms(),
        )
        .into_iter()
        .map(TaskComparison::from)
        .collect();

        let resources: Vec<ResourceComparison> =
            diff_entities(&old.resources, &new.resources, &[], 0)
                .into_iter()
                .map(ResourceComparison::from)
                .collect();

        let conflicts = if opts.detect_conflicts {
            detect_conflicts(new)
        } else {
            Vec::new()
        };

        let summary = ComparisonSummary::tally(&tasks, &resources, &conflicts);

        let statistics = opts
            .include_statistics
            .then(|| ComparisonStatistics::calculate(old, new));

        tracing::debug!(
            old = %old.id,
            new = %new.id,
            tasks_added = summary.tasks_added,
            tasks_removed = summary.tasks_removed,
            tasks_modified = summary.tasks_modified,
            conflicts = summary.conflicts_found,
            "schedules compared"
        );

        ComparisonResult {
            summary,
            tasks,
            resources,
            conflicts,
            statistics,
        }
    }
}

/// Compares two schedules with the given options.
pub fn compare(old: &Schedule, new: &Schedule, options: &ComparisonOptions) -> ComparisonResult {
    ScheduleComparator::new(options.clone()).compare(old, new)
}
