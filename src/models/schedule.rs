//! Schedule snapshot model.
//!
//! A schedule is one named, versioned timetable: a set of resources and the
//! tasks bound to them. Snapshots are plain values; the comparison engine
//! only ever reads them.

use serde::{Deserialize, Serialize};

use super::{Resource, Task};

/// A timetable snapshot at one version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Snapshot identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Version label.
    pub version: String,
    /// Creation time (ms since the Unix epoch).
    pub created_at: i64,
    /// Resources, unique by ID.
    pub resources: Vec<Resource>,
    /// Tasks, unique by ID.
    pub tasks: Vec<Task>,
    /// Optional academic context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ScheduleMetadata>,
}

/// Academic context of a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Sets the creation time.
    pub fn with_created_at(mut self, created_at_ms: i64) -> Self {
        self.created_at = created_at_ms;
        self
    }

    /// Adds a resource.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Adds a task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Sets the academic metadata.
    pub fn with_metadata(mut self, metadata: ScheduleMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Looks up a resource by ID.
    ///
    /// With duplicate IDs the last entry wins.
    pub fn resource(&self, resource_id: &str) -> Option<&Resource> {
        self.resources.iter().rev().find(|r| r.id == resource_id)
    }

    /// Looks up a task by ID. With duplicate IDs the last entry wins.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().rev().find(|t| t.id == task_id)
    }

    /// Returns all tasks bound to a given resource.
    pub fn tasks_for_resource(&self, resource_id: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.group == resource_id).collect()
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of resources.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

impl ScheduleMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = Some(semester.into());
        self
    }

    pub fn with_academic_year(mut self, year: impl Into<String>) -> Self {
        self.academic_year = Some(year.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}
