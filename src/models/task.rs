//! Task model.
//!
//! A task is a single time-boxed session (lecture, practice, lab) owned by
//! exactly one resource through its `group` field.
//!
//! # Time Representation
//! `start` and `end` are milliseconds since the Unix epoch (UTC), with
//! `start < end` expected of well-formed input.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::time_window::{TimeWindow, MS_PER_HOUR};

/// A scheduled session bound to one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Display label.
    pub content: String,
    /// Start time (ms).
    pub start: i64,
    /// End time (ms).
    pub end: i64,
    /// Owning resource ID.
    pub group: String,
    /// Session kind.
    pub task_type: TaskType,
    /// Presentation class, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Presentation title, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Course identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    /// Course display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    /// Scheduling priority (higher = more important).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// Kind of teaching session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Lecture.
    Theory,
    /// Exercise session.
    Practice,
    /// Laboratory session.
    Lab,
}

impl TaskType {
    /// Serialized name of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theory => "theory",
            Self::Practice => "practice",
            Self::Lab => "lab",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Task {
    /// Creates a new task occupying `[start, end)` on resource `group`.
    pub fn new(
        id: impl Into<String>,
        group: impl Into<String>,
        task_type: TaskType,
        start: i64,
        end: i64,
    ) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
            start,
            end,
            group: group.into(),
            task_type,
            class_name: None,
            title: None,
            course_id: None,
            course_name: None,
            priority: None,
        }
    }

    /// Sets the display label.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the course identifier.
    pub fn with_course_id(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    /// Sets the course name.
    pub fn with_course_name(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = Some(course_name.into());
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the presentation class name.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets the presentation title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The interval this task occupies.
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }

    /// Duration (end - start) in ms.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.window().duration_ms()
    }

    /// Duration in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration_ms() as f64 / MS_PER_HOUR as f64
    }

    /// Whether this task overlaps `other` in time.
    pub fn overlaps(&self, other: &Task) -> bool {
        self.window().overlaps(&other.window())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("1", "R1", TaskType::Theory, 0, 2 * MS_PER_HOUR)
            .with_content("Database Systems")
            .with_course_id("CS301")
            .with_course_name("CS Database Systems")
            .with_priority(3);

        assert_eq!(task.id, "1");
        assert_eq!(task.group, "R1");
        assert_eq!(task.content, "Database Systems");
        assert_eq!(task.course_id.as_deref(), Some("CS301"));
        assert_eq!(task.priority, Some(3));
        assert_eq!(task.title, None);
    }

    #[test]
    fn test_task_duration() {
        let task = Task::new("1", "R1", TaskType::Lab, 1000, 1000 + 90 * 60_000);
        assert_eq!(task.duration_ms(), 5_400_000);
        assert!((task.duration_hours() - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_task_overlap_half_open() {
        let a = Task::new("a", "R1", TaskType::Theory, 0, 100);
        let b = Task::new("b", "R1", TaskType::Theory, 50, 150);
        let c = Task::new("c", "R1", TaskType::Theory, 100, 200);

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_optional_fields_omitted_in_json() {
        let task = Task::new("1", "R1", TaskType::Practice, 0, 10);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["task_type"], "practice");
        assert!(json.get("course_name").is_none());
    }
}
