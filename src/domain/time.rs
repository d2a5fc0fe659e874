use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A wall-clock time on a 24-hour clock.
///
/// Ordering is lexicographic on (hour, minute); equality is componentwise.
/// Values are validated at construction, so every `TimeValue` in the system
/// holds 0..=23 hours and 0..=59 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue {
    hour: u8,
    minute: u8,
}

impl TimeValue {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(Error::InvalidTime(format!("hour {} is out of range 0..=23", hour)));
        }
        if minute > 59 {
            return Err(Error::InvalidTime(format!("minute {} is out of range 0..=59", minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeValue {
    type Err = Error;

    /// Parses a `"H:MM"` clock time, e.g. `"9:00"` or `"14:30"`.
    fn from_str(text: &str) -> Result<Self> {
        let (hour, minute) = text
            .split_once(':')
            .ok_or_else(|| Error::InvalidTime(format!("'{}' is not of the form H:MM", text)))?;

        let hour = hour
            .trim()
            .parse::<u8>()
            .map_err(|_| Error::InvalidTime(format!("'{}' has a non-numeric hour", text)))?;
        let minute = minute
            .trim()
            .parse::<u8>()
            .map_err(|_| Error::InvalidTime(format!("'{}' has a non-numeric minute", text)))?;

        Self::new(hour, minute)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}
