//! Text rendering of comparison results.
//!
//! | Format | Content |
//! |--------|---------|
//! | `json` | Full result, pretty-printed |
//! | `csv` | One row per task verdict, or per changed field of a modified task |
//! | `summary` | Fixed-layout report of counts and conflicts |
//!
//! Callers choose file names and content types; rendering never touches I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::{CompareError, Result};
use crate::result::ComparisonResult;

/// CSV header row.
pub const CSV_HEADER: [&str; 5] = ["Task ID", "Status", "Field Changed", "Old Value", "New Value"];

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Csv,
    Summary,
}

impl ExportFormat {
    /// Format name as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "summary" => Ok(Self::Summary),
            other => Err(CompareError::UnsupportedFormat(other.to_owned())),
        }
    }
}

/// Renders a result in the given format.
pub fn export(result: &ComparisonResult, format: ExportFormat) -> Result<String> {
    tracing::debug!(%format, tasks = result.tasks.len(), "exporting comparison");
    match format {
        ExportFormat::Json => to_json(result),
        ExportFormat::Csv => to_csv(result),
        ExportFormat::Summary => Ok(to_summary(result)),
    }
}

/// Renders a result in a format given by name.
///
/// Fails with [`CompareError::UnsupportedFormat`] for unknown names.
pub fn export_as(result: &ComparisonResult, format: &str) -> Result<String> {
    export(result, format.parse()?)
}

/// Pretty-printed JSON of the whole result.
pub fn to_json(result: &ComparisonResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// CSV with one row per changed field of modified tasks and one row per
/// other task verdict.
pub fn to_csv(result: &ComparisonResult) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;

    for task in &result.tasks {
        if task.changes.is_empty() {
            wtr.write_record([task.task_id.as_str(), task.status.as_str(), "", "", ""])?;
            continue;
        }
        for change in &task.changes {
            wtr.write_record([
                task.task_id.as_str(),
                task.status.as_str(),
                change.field.as_str(),
                change.old_value.to_json_literal().as_str(),
                change.new_value.to_json_literal().as_str(),
            ])?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| CompareError::Encoding(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| CompareError::Encoding(e.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Human-readable report of counts and conflict details.
pub fn to_summary(result: &ComparisonResult) -> String {
    let s = &result.summary;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = write!(
        out,
        "Schedule Comparison Summary\n\
         ==========================\n\
         \n\
         Tasks:\n\
         - Total tasks (old): {}\n\
         - Total tasks (new): {}\n\
         - Tasks added: {}\n\
         - Tasks removed: {}\n\
         - Tasks modified: {}\n\
         - Tasks unchanged: {}\n\
         \n\
         Resources:\n\
         - Resources added: {}\n\
         - Resources removed: {}\n\
         - Resources modified: {}\n\
         \n\
         Conflicts:\n\
         - Total conflicts found: {}",
        s.total_tasks_old,
        s.total_tasks_new,
        s.tasks_added,
        s.tasks_removed,
        s.tasks_modified,
        s.tasks_unchanged,
        s.resources_added,
        s.resources_removed,
        s.resources_modified,
        s.conflicts_found,
    );

    if !result.conflicts.is_empty() {
        out.push_str("\n\nConflict Details:");
        for (i, conflict) in result.conflicts.iter().enumerate() {
            let _ = write!(
                out,
                "\n{}. {} for {}\n   Time: {} - {}\n   Conflicting tasks: {}",
                i + 1,
                conflict.conflict_type,
                conflict.resource_name,
                format_timestamp(conflict.time_range.start_ms),
                format_timestamp(conflict.time_range.end_ms),
                conflict.task_labels().join(", "),
            );
        }
    }

    out
}

/// Per-resource utilization report.
///
/// Lists nothing but the header when statistics were disabled.
pub fn utilization_summary(result: &ComparisonResult) -> String {
    let mut out = String::from("Resource Utilization Changes:\n");
    let Some(stats) = &result.statistics else {
        return out;
    };

    for (resource_id, u) in &stats.utilization_changes_by_resource {
        let change = if u.change > 0.0 {
            format!("+{:.1}", u.change)
        } else {
            format!("{:.1}", u.change)
        };
        let _ = writeln!(
            out,
            "- Resource {resource_id}: {:.1}h → {:.1}h ({change}h)",
            u.old_utilization, u.new_utilization
        );
    }
    out
}

/// Formats epoch milliseconds as `YYYY-MM-DD HH:MM` (UTC).
fn format_timestamp(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map_or_else(|| ms.to_string(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}
