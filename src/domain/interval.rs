use std::fmt;

use crate::domain::time::TimeValue;
use crate::error::{Error, Result};

/// A time window between two clock times, inclusive at both endpoints for
/// comparison purposes.
///
/// The same type models both uses in the system: an exam's required
/// occupancy window and a room's availability window. Construction enforces
/// `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: TimeValue,
    end: TimeValue,
}

impl TimeInterval {
    pub fn new(start: TimeValue, end: TimeValue) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidInterval(format!("end {} precedes start {}", end, start)));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeValue {
        self.start
    }

    pub fn end(&self) -> TimeValue {
        self.end
    }

    /// True iff this window fully brackets `other`.
    ///
    /// Partial overlap is not enough: a room must cover an exam's window
    /// entirely for the exam to be placeable there.
    pub fn contains(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// True iff the two windows do not overlap.
    ///
    /// Touching endpoints count as disjoint, which permits back-to-back
    /// bookings in the same room with zero gap.
    pub fn disjoint(&self, other: &TimeInterval) -> bool {
        self.end <= other.start || other.end <= self.start
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: &str, end: &str) -> TimeInterval {
        TimeInterval::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    #[test]
    fn rejects_reversed_endpoints() {
        let start: TimeValue = "11:00".parse().unwrap();
        let end: TimeValue = "9:00".parse().unwrap();
        assert!(TimeInterval::new(start, end).is_err());
    }

    #[test]
    fn accepts_empty_window() {
        let point: TimeValue = "9:00".parse().unwrap();
        assert!(TimeInterval::new(point, point).is_ok());
    }

    #[test]
    fn containment_requires_full_bracketing() {
        let room = interval("8:00", "12:00");

        assert!(room.contains(&interval("9:00", "10:00")));
        assert!(room.contains(&interval("8:00", "12:00")));
        assert!(!room.contains(&interval("7:00", "9:00")));
        assert!(!room.contains(&interval("11:00", "13:00")));
        assert!(!interval("9:00", "10:00").contains(&room));
    }

    #[test]
    fn touching_windows_are_disjoint() {
        let first = interval("9:00", "10:00");
        let second = interval("10:00", "11:00");

        assert!(first.disjoint(&second));
        assert!(second.disjoint(&first));
    }

    #[test]
    fn overlapping_windows_are_not_disjoint() {
        let first = interval("9:00", "11:00");
        let second = interval("10:00", "12:00");

        assert!(!first.disjoint(&second));
        assert!(!second.disjoint(&first));
        assert!(!first.disjoint(&first));
    }

    #[test]
    fn separated_windows_are_disjoint() {
        assert!(interval("8:00", "9:00").disjoint(&interval("10:00", "11:00")));
    }
}
