//! Time interval model.
//!
//! # Time Model
//! All times are milliseconds since the Unix epoch (UTC). Intervals are
//! half-open: `[start_ms, end_ms)`.

use serde::{Deserialize, Serialize};

/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60_000;

/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// A time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Duration of this window (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether `other` lies entirely inside this window, bounds inclusive.
    #[inline]
    pub fn encloses(&self, other: &Self) -> bool {
        other.start_ms >= self.start_ms && other.end_ms <= self.end_ms
    }

    /// Whether two windows overlap. Windows that only touch do not.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }

    /// The shared part of two windows, if they overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start_ms.max(other.start_ms);
        let end = self.end_ms.min(other.end_ms);
        if end > start {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_of_task_window() {
        let lecture = TimeWindow::new(9 * MS_PER_HOUR, 10 * MS_PER_HOUR + 30 * MS_PER_MINUTE);
        assert_eq!(lecture.duration_ms(), 90 * MS_PER_MINUTE);
        assert_eq!(TimeWindow::new(500, 500).duration_ms(), 0);
    }

    #[test]
    fn test_time_window_overlap() {
        let a = TimeWindow::new(0, 100);
        let b = TimeWindow::new(50, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeWindow::new(100, 200); // touching but not overlapping
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_encloses_is_inclusive() {
        let range = TimeWindow::new(0, 100);
        assert!(range.encloses(&TimeWindow::new(0, 100)));
        assert!(range.encloses(&TimeWindow::new(10, 90)));
        assert!(!range.encloses(&TimeWindow::new(-1, 50)));
        assert!(!range.encloses(&TimeWindow::new(50, 101)));
    }

    #[test]
    fn test_intersection() {
        let a = TimeWindow::new(0, 100);
        let b = TimeWindow::new(50, 150);
        assert_eq!(a.intersection(&b), Some(TimeWindow::new(50, 100)));
        assert_eq!(a.intersection(&TimeWindow::new(100, 200)), None);
    }
}
