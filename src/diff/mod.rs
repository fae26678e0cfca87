//! Field-level diffing of tasks and resources.
//!
//! [`field`] holds the per-entity comparator tables; [`engine`] pairs old and
//! new entities by id and classifies each pair.

mod engine;
mod field;

pub use engine::{detect_changes, diff_entities, ChangeStatus, Verdict};
pub use field::{Diffable, FieldChange, FieldRule, FieldValue, ResourceField, TaskField};

/// A task field difference.
pub type TaskChange = FieldChange<TaskField>;

/// A resource field difference.
pub type ResourceChange = FieldChange<ResourceField>;
