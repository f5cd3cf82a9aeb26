//! Timestamp value object
//!
//! Captured exactly once per deployment and rendered in ISO-8601 basic form
//! (`YYYYMMDDTHHMMSS`). Every artifact of a run carries the same value.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};

/// Deployment timestamp (local wall-clock time, second precision)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// strftime format for ISO-8601 basic date-time (no hyphens or colons)
    pub const FORMAT: &'static str = "%Y%m%dT%H%M%S";

    /// Read the local clock
    pub fn now() -> Self {
        Self::from_naive(Local::now().naive_local())
    }

    /// Build from a fixed date-time; sub-second precision is dropped
    pub fn from_naive(value: NaiveDateTime) -> Self {
        use chrono::Timelike;
        Self(value.with_nanosecond(0).unwrap_or(value))
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, Self::FORMAT).map(Self)
    }
}
