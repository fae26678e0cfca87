//! Per-field comparator table.
//!
//! Each diffable entity enumerates its fields explicitly. A field knows how
//! to read its value from the entity and which equality rule applies to it.
//! The diff engine iterates the table and never names a field itself.
//!
//! | Entity | Field | Rule |
//! |--------|-------|------|
//! | Task | `start`, `end` | `TimeTolerance` |
//! | Task | all others | `Exact` |
//! | Resource | all | `Exact` |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Resource, Task};

/// A field value lifted into a comparable, serializable form.
///
/// Serializes as the bare JSON literal: `null`, a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Optional field not set.
    Missing,
    /// Text field.
    Text(String),
    /// Timestamp (ms since the Unix epoch).
    Timestamp(i64),
    /// Integer field.
    Number(i64),
}

impl FieldValue {
    fn text(value: &str) -> Self {
        Self::Text(value.to_owned())
    }

    fn optional_text(value: Option<&String>) -> Self {
        value.map_or(Self::Missing, |v| Self::Text(v.clone()))
    }

    /// Renders the value as a JSON literal.
    pub fn to_json_literal(&self) -> String {
        match self {
            Self::Missing => "null".to_owned(),
            Self::Text(s) => serde_json::Value::String(s.clone()).to_string(),
            Self::Timestamp(v) | Self::Number(v) => v.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("-"),
            Self::Text(s) => f.write_str(s),
            Self::Timestamp(v) | Self::Number(v) => write!(f, "{v}"),
        }
    }
}

/// Equality rule applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Any structural difference is a change.
    Exact,
    /// Timestamps differing by at most the tolerance are equal.
    TimeTolerance,
}

impl FieldRule {
    /// Whether `old` and `new` differ under this rule.
    ///
    /// The tolerance comparison is strict: a difference exactly equal to
    /// `tolerance_ms` is not a change.
    pub fn differs(self, old: &FieldValue, new: &FieldValue, tolerance_ms: u64) -> bool {
        match (self, old, new) {
            (Self::TimeTolerance, FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => {
                a.abs_diff(*b) > tolerance_ms
            }
            _ => old != new,
        }
    }
}

/// An entity the diff engine can compare field by field.
pub trait Diffable {
    /// Field enumeration for this entity.
    type Field: Copy + PartialEq + fmt::Debug + 'static;

    /// Identity used to pair old and new entities.
    fn id(&self) -> &str;

    /// Every comparable field, in reporting order.
    fn fields() -> &'static [Self::Field];

    /// Reads one field.
    fn field_value(&self, field: Self::Field) -> FieldValue;

    /// Equality rule for one field.
    fn field_rule(field: Self::Field) -> FieldRule;
}

/// A single field difference between two versions of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange<F> {
    /// Changed field.
    pub field: F,
    /// Value in the old schedule.
    pub old_value: FieldValue,
    /// Value in the new schedule.
    pub new_value: FieldValue,
}

/// Comparable task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// Task identifier.
    Id,
    /// Display label.
    Content,
    /// Start time, compared with the time tolerance.
    Start,
    /// End time, compared with the time tolerance.
    End,
    /// Owning resource id.
    Group,
    /// Theory, practice or lab.
    TaskType,
    /// Rendering hint.
    ClassName,
    /// Tooltip text.
    Title,
    /// Course code.
    CourseId,
    /// Course display name.
    CourseName,
    /// Optional priority.
    Priority,
}

impl TaskField {
    /// All task fields, in reporting order.
    pub const ALL: [TaskField; 11] = [
        TaskField::Id,
        TaskField::Content,
        TaskField::Start,
        TaskField::End,
        TaskField::Group,
        TaskField::TaskType,
        TaskField::ClassName,
        TaskField::Title,
        TaskField::CourseId,
        TaskField::CourseName,
        TaskField::Priority,
    ];

    /// Serialized field name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Content => "content",
            Self::Start => "start",
            Self::End => "end",
            Self::Group => "group",
            Self::TaskType => "task_type",
            Self::ClassName => "class_name",
            Self::Title => "title",
            Self::CourseId => "course_id",
            Self::CourseName => "course_name",
            Self::Priority => "priority",
        }
    }

    /// Whether this field holds a task time bound.
    pub const fn is_time(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Diffable for Task {
    type Field = TaskField;

    fn id(&self) -> &str {
        &self.id
    }

    fn fields() -> &'static [TaskField] {
        &TaskField::ALL
    }

    fn field_value(&self, field: TaskField) -> FieldValue {
        match field {
            TaskField::Id => FieldValue::text(&self.id),
            TaskField::Content => FieldValue::text(&self.content),
            TaskField::Start => FieldValue::Timestamp(self.start),
            TaskField::End => FieldValue::Timestamp(self.end),
            TaskField::Group => FieldValue::text(&self.group),
            TaskField::TaskType => FieldValue::text(self.task_type.as_str()),
            TaskField::ClassName => FieldValue::optional_text(self.class_name.as_ref()),
            TaskField::Title => FieldValue::optional_text(self.title.as_ref()),
            TaskField::CourseId => FieldValue::optional_text(self.course_id.as_ref()),
            TaskField::CourseName => FieldValue::optional_text(self.course_name.as_ref()),
            TaskField::Priority => self
                .priority
                .map_or(FieldValue::Missing, |p| FieldValue::Number(i64::from(p))),
        }
    }

    fn field_rule(field: TaskField) -> FieldRule {
        if field.is_time() {
            FieldRule::TimeTolerance
        } else {
            FieldRule::Exact
        }
    }
}

/// Comparable resource fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceField {
    /// Resource identifier.
    Id,
    /// Display name.
    Name,
    /// Instructor, classroom or laboratory.
    #[serde(rename = "type")]
    ResourceType,
}

impl ResourceField {
    /// All resource fields, in reporting order.
    pub const ALL: [ResourceField; 3] = [
        ResourceField::Id,
        ResourceField::Name,
        ResourceField::ResourceType,
    ];

    /// Serialized field name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::ResourceType => "type",
        }
    }
}

impl fmt::Display for ResourceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Diffable for Resource {
    type Field = ResourceField;

    fn id(&self) -> &str {
        &self.id
    }

    fn fields() -> &'static [ResourceField] {
        &ResourceField::ALL
    }

    fn field_value(&self, field: ResourceField) -> FieldValue {
        match field {
            ResourceField::Id => FieldValue::text(&self.id),
            ResourceField::Name => FieldValue::text(&self.name),
            ResourceField::ResourceType => FieldValue::text(self.resource_type.as_str()),
        }
    }

    fn field_rule(_field: ResourceField) -> FieldRule {
        FieldRule::Exact
    }
}
