//! Timetable comparison engine.
//!
//! Compares two immutable snapshots of a timetable and reports what changed,
//! where the new version double-books a resource, and how scheduled hours
//! moved between resources.
//!
//! # Modules
//!
//! - **`models`**: Snapshot types — `Resource`, `Task`, `Schedule`, `TimeWindow`
//! - **`diff`**: Per-field comparator tables and the id-keyed diff engine
//! - **`conflict`**: Pairwise overlap detection per resource
//! - **`statistics`**: Utilization and task-type distribution
//! - **`comparator`**: `ScheduleComparator`, tying the stages together
//! - **`export`**: JSON / CSV / summary rendering
//! - **`validation`**: Optional snapshot integrity checks
//!
//! # Architecture
//!
//! Every stage is a pure function of its inputs. Snapshots are borrowed,
//! never mutated; results own their data and are returned by value, so
//! concurrent comparisons need no coordination.

pub mod comparator;
pub mod conflict;
pub mod diff;
pub mod error;
pub mod export;
pub mod models;
pub mod options;
pub mod result;
pub mod statistics;
pub mod validation;

#[cfg(test)]
mod fixtures;

pub use comparator::{compare, ScheduleComparator};
pub use conflict::{detect_conflicts, ConflictType, TimeConflict};
pub use diff::{ChangeStatus, FieldValue, ResourceField, TaskField};
pub use error::{CompareError, Result};
pub use export::{export, export_as, utilization_summary, ExportFormat};
pub use models::{Resource, ResourceType, Schedule, ScheduleMetadata, Task, TaskType, TimeWindow};
pub use options::ComparisonOptions;
pub use result::{ComparisonResult, ComparisonSummary, ResourceComparison, TaskComparison};
pub use statistics::{ComparisonStatistics, UtilizationChange};
