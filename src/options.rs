//! Comparison configuration.
//!
//! Every field has a default, so a partial JSON document such as
//! `{"time_tolerance_minutes": 5}` is a complete configuration.

use serde::{Deserialize, Serialize};

use crate::diff::TaskField;
use crate::error::Result;
use crate::models::{Task, TimeWindow, MS_PER_MINUTE};

/// Options controlling a schedule comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonOptions {
    /// Task fields excluded from modification detection.
    pub ignore_fields: Vec<TaskField>,
    /// Start/end differences up to this many minutes are not a change.
    pub time_tolerance_minutes: u64,
    /// Whether to detect overlaps in the new schedule.
    pub detect_conflicts: bool,
    /// Whether to compute utilization and task-type statistics.
    pub include_statistics: bool,
    /// Restricts the task diff to tasks lying fully inside this range.
    pub date_range: Option<TimeWindow>,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            ignore_fields: Vec::new(),
            time_tolerance_minutes: 0,
            detect_conflicts: true,
            include_statistics: true,
            date_range: None,
        }
    }
}

impl ComparisonOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Excludes a task field from modification detection.
    pub fn with_ignored_field(mut self, field: TaskField) -> Self {
        if !self.ignore_fields.contains(&field) {
            self.ignore_fields.push(field);
        }
        self
    }

    /// Sets the start/end tolerance in minutes.
    pub fn with_time_tolerance_minutes(mut self, minutes: u64) -> Self {
        self.time_tolerance_minutes = minutes;
        self
    }

    /// Enables or disables conflict detection.
    pub fn with_conflict_detection(mut self, enabled: bool) -> Self {
        self.detect_conflicts = enabled;
        self
    }

    /// Enables or disables statistics.
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.include_statistics = enabled;
        self
    }

    /// Restricts the task diff to `[start_ms, end_ms]`.
    pub fn with_date_range(mut self, start_ms: i64, end_ms: i64) -> Self {
        self.date_range = Some(TimeWindow::new(start_ms, end_ms));
        self
    }

    /// Tolerance in milliseconds, saturating at `u64::MAX`.
    #[inline]
    pub fn tolerance_ms(&self) -> u64 {
        self.time_tolerance_minutes
            .saturating_mul(MS_PER_MINUTE.unsigned_abs())
    }

    /// Whether a field is excluded from modification detection.
    #[inline]
    pub fn is_ignored(&self, field: TaskField) -> bool {
        self.ignore_fields.contains(&field)
    }

    /// Whether a task takes part in the task diff.
    pub fn in_date_range(&self, task: &Task) -> bool {
        match &self.date_range {
            None => true,
            Some(range) => range.encloses(&task.window()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskType;

    #[test]
    fn test_defaults() {
        let opts = ComparisonOptions::default();
        assert!(opts.ignore_fields.is_empty());
        assert_eq!(opts.time_tolerance_minutes, 0);
        assert!(opts.detect_conflicts);
        assert!(opts.include_statistics);
        assert!(opts.date_range.is_none());
    }

    #[test]
    fn test_from_partial_json() {
        let opts = ComparisonOptions::from_json(
            r#"{"time_tolerance_minutes": 5, "ignore_fields": ["priority", "course_name"]}"#,
        )
        .unwrap();
        assert_eq!(opts.time_tolerance_minutes, 5);
        assert_eq!(opts.tolerance_ms(), 300_000);
        assert!(opts.is_ignored(TaskField::Priority));
        assert!(opts.is_ignored(TaskField::CourseName));
        assert!(!opts.is_ignored(TaskField::Start));
        assert!(opts.detect_conflicts);
    }

    #[test]
    fn test_from_invalid_json() {
        assert!(ComparisonOptions::from_json("{not json").is_err());
        assert!(ComparisonOptions::from_json(r#"{"ignore_fields": ["bogus"]}"#).is_err());
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        assert!(ComparisonOptions::from_json(r#"{"time_tolerance_minutes": -1}"#).is_err());
    }

    #[test]
    fn test_huge_tolerance_saturates() {
        let opts = ComparisonOptions::from_json(
            r#"{"time_tolerance_minutes": 9223372036854775807}"#,
        )
        .unwrap();
        assert_eq!(opts.tolerance_ms(), u64::MAX);

        let opts = ComparisonOptions::new().with_time_tolerance_minutes(u64::MAX);
        assert_eq!(opts.tolerance_ms(), u64::MAX);
    }

    #[test]
    fn test_ignored_field_deduplicated() {
        let opts = ComparisonOptions::new()
            .with_ignored_field(TaskField::Title)
            .with_ignored_field(TaskField::Title);
        assert_eq!(opts.ignore_fields, vec![TaskField::Title]);
    }

    #[test]
    fn test_date_range_filter() {
        let opts = ComparisonOptions::new().with_date_range(100, 200);
        let inside = Task::new("a", "R1", TaskType::Theory, 100, 200);
        let straddling = Task::new("b", "R1", TaskType::Theory, 150, 250);
        let outside = Task::new("c", "R1", TaskType::Theory, 300, 400);

        assert!(opts.in_date_range(&inside));
        assert!(!opts.in_date_range(&straddling));
        assert!(!opts.in_date_range(&outside));
        assert!(ComparisonOptions::new().in_date_range(&outside));
    }
}
