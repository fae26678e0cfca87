//! Input validation for schedule snapshots.
//!
//! The comparator accepts any snapshot and never rejects input. Upstream
//! mappers can run these checks first to catch data the comparator would
//! otherwise resolve silently (last write wins, skipped conflict groups):
//! - Duplicate resource or task IDs
//! - Tasks bound to a resource that is not in the snapshot
//! - Tasks whose start is not before their end

use crate::models::Schedule;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of one kind share the same ID.
    DuplicateId,
    /// A task references a resource that doesn't exist.
    InvalidResourceReference,
    /// A task does not start before it ends.
    InvalidTimeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates one schedule snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(schedule: &Schedule) -> ValidationResult {
    let mut errors = Vec::new();

    let mut resource_ids = HashSet::new();
    for r in &schedule.resources {
        if !resource_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", r.id),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    for task in &schedule.tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if !resource_ids.contains(task.group.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidResourceReference,
                format!(
                    "Task '{}' references unknown resource '{}'",
                    task.id, task.group
                ),
            ));
        }

        if task.start >= task.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Task '{}' starts at {} but ends at {}",
                    task.id, task.start, task.end
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(
            schedule = %schedule.id,
            errors = errors.len(),
            "schedule failed validation"
        );
        Err(errors)
    }
}
