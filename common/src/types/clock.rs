use chrono::{Local, NaiveDateTime, SubsecRound};
use std::fmt;
use std::str::FromStr;

use crate::constants::TIMESTAMP_FORMAT;

// Accepts any number of fractional digits when reading timestamps back.
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Local wall-clock time with millisecond precision.
///
/// Renders as `yyyy-MM-dd HH:mm:ss.SSS`, which is also the prefix of every log
/// file name and the first field of every log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    /// Wraps a datetime, dropping anything below the millisecond.
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime.trunc_subsecs(3))
    }

    pub fn inner(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_PARSE_FORMAT).map(Self::from_datetime)
    }
}
