//! Resource model.
//!
//! Resources are the schedulable entities tasks are bound to: instructors,
//! classrooms and laboratories. A resource is identified by its `id`, which
//! is unique within one schedule snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource that tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Resource classification.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

/// Resource type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// A person teaching sessions.
    Instructor,
    /// A lecture room.
    Classroom,
    /// A laboratory room.
    Laboratory,
}

impl ResourceType {
    /// Serialized name of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instructor => "instructor",
            Self::Classroom => "classroom",
            Self::Laboratory => "laboratory",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Resource {
    /// Creates a new resource with an empty name.
    pub fn new(id: impl Into<String>, resource_type: ResourceType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            resource_type,
        }
    }

    /// Creates an instructor resource.
    pub fn instructor(id: impl Into<String>) -> Self {
        Self::new(id, ResourceType::Instructor)
    }

    /// Creates a classroom resource.
    pub fn classroom(id: impl Into<String>) -> Self {
        Self::new(id, ResourceType::Classroom)
    }

    /// Creates a laboratory resource.
    pub fn laboratory(id: impl Into<String>) -> Self {
        Self::new(id, ResourceType::Laboratory)
    }

    /// Sets the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
