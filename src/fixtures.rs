//! Sample timetables shared by the unit tests.
//!
//! Two versions of a Fall 2024 computer-science timetable:
//!
//! | Change in v2 | Task / Resource |
//! |--------------|-----------------|
//! | moved to instructor 2, 30 min earlier | task 1 |
//! | renamed | task 2 |
//! | removed | task 3 |
//! | added (new room 8) | task 4 |
//! | added, overlaps task 1 on instructor 2 | task 5 |
//! | added | resource 8 |

use crate::models::{Resource, Schedule, ScheduleMetadata, Task, TaskType, MS_PER_HOUR, MS_PER_MINUTE};

/// 2024-01-01T00:00:00Z in ms.
const JAN_1_2024: i64 = 1_704_067_200_000;

/// Timestamp for a day of January 2024 (UTC).
pub fn at(day: i64, hour: i64, minute: i64) -> i64 {
    JAN_1_2024 + (day - 1) * 24 * MS_PER_HOUR + hour * MS_PER_HOUR + minute * MS_PER_MINUTE
}

/// Timestamp on 2024-01-15 (UTC).
pub fn hm(hour: i64, minute: i64) -> i64 {
    at(15, hour, minute)
}

fn resources() -> Vec<Resource> {
    vec![
        Resource::instructor("1").with_name("Dr. Smith"),
        Resource::instructor("2").with_name("Prof. Johnson"),
        Resource::classroom("4").with_name("Room A101"),
        Resource::laboratory("7").with_name("Computer Lab 1"),
    ]
}

fn metadata() -> ScheduleMetadata {
    ScheduleMetadata::new()
        .with_semester("Fall")
        .with_academic_year("2024")
        .with_department("Computer Science")
}

pub fn fall_2024_v1() -> Schedule {
    let mut s = Schedule::new("schedule-1", "Fall 2024 - Version 1", "1.0")
        .with_created_at(at(1, 0, 0))
        .with_metadata(metadata());
    s.resources = resources();
    s.with_task(
        Task::new("1", "1", TaskType::Theory, hm(10, 0), hm(12, 0))
            .with_content("Database Systems")
            .with_course_name("CS Database Systems"),
    )
    .with_task(
        Task::new("2", "7", TaskType::Lab, at(16, 9, 0), at(16, 11, 0))
            .with_content("Programming Lab")
            .with_course_name("CS Programming"),
    )
    .with_task(
        Task::new("3", "2", TaskType::Theory, at(17, 14, 0), at(17, 16, 0))
            .with_content("Algorithms")
            .with_course_name("CS Algorithms"),
    )
}

pub fn fall_2024_v2() -> Schedule {
    let mut s = Schedule::new("schedule-2", "Fall 2024 - Version 2", "2.0")
        .with_created_at(at(15, 0, 0))
        .with_metadata(metadata());
    s.resources = resources();
    s.with_resource(Resource::classroom("8").with_name("Room B205"))
        .with_task(
            Task::new("1", "2", TaskType::Theory, hm(9, 30), hm(11, 30))
                .with_content("Database Systems")
                .with_course_name("CS Database Systems"),
        )
        .with_task(
            Task::new("2", "7", TaskType::Lab, at(16, 9, 0), at(16, 11, 0))
                .with_content("Advanced Programming Lab")
                .with_course_name("CS Programming"),
        )
        .with_task(
            Task::new("4", "8", TaskType::Practice, at(18, 10, 0), at(18, 12, 0))
                .with_content("Software Engineering")
                .with_course_name("CS Software Engineering"),
        )
        .with_task(
            Task::new("5", "2", TaskType::Theory, hm(11, 0), hm(13, 0))
                .with_content("Data Structures")
                .with_course_name("CS Data Structures"),
        )
}
