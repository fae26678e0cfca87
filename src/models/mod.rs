//! Timetable domain models.
//!
//! Provides the immutable snapshot types the comparison engine consumes.
//!
//! # Domain Mappings
//!
//! | schedule-compare | University timetable |
//! |------------------|----------------------|
//! | Resource | Instructor / Classroom / Laboratory |
//! | Task | Lecture / Practice / Lab session |
//! | Schedule | Timetable version |

mod resource;
mod schedule;
mod task;
mod time_window;

pub use resource::{Resource, ResourceType};
pub use schedule::{Schedule, ScheduleMetadata};
pub use task::{Task, TaskType};
pub use time_window::{TimeWindow, MS_PER_HOUR, MS_PER_MINUTE};
