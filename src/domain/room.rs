use crate::api::record::RoomRecord;
use crate::domain::interval::TimeInterval;
use crate::error::Result;

/// A room with its availability window.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    interval: TimeInterval,
}

impl Room {
    pub fn new(name: impl Into<String>, interval: TimeInterval) -> Self {
        Self { name: name.into(), interval }
    }

    /// Builds a validated room from a raw file record.
    pub fn from_record(record: RoomRecord) -> Result<Self> {
        let opening = record.opening.parse()?;
        let closing = record.closing.parse()?;
        Ok(Self { name: record.name, interval: TimeInterval::new(opening, closing)? })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }
}
