use crate::api::record::ExamRecord;
use crate::domain::interval::TimeInterval;
use crate::error::Result;

/// An exam with its required occupancy window.
///
/// Exams are identified by their position in the exam list; that position
/// also fixes the order in which the search processes them.
#[derive(Debug, Clone)]
pub struct Exam {
    name: String,
    interval: TimeInterval,
}

impl Exam {
    pub fn new(name: impl Into<String>, interval: TimeInterval) -> Self {
        Self { name: name.into(), interval }
    }

    /// Builds a validated exam from a raw file record.
    ///
    /// Fails with `InvalidTime` or `InvalidInterval` before the search ever
    /// sees the entity.
    pub fn from_record(record: ExamRecord) -> Result<Self> {
        let start = record.start.parse()?;
        let end = record.end.parse()?;
        Ok(Self { name: record.name, interval: TimeInterval::new(start, end)? })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }
}
