use std::fmt;

use crate::constants::{DEFAULT_SESSION_SECONDS, MAX_HOURS, MAX_MINUTES, MAX_SECONDS};
use crate::models::errors::RecorderError;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// One of the three duration inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationField {
    Hours,
    Minutes,
    Seconds,
}

impl DurationField {
    pub fn max(&self) -> u64 {
        match self {
            DurationField::Hours => MAX_HOURS,
            DurationField::Minutes => MAX_MINUTES,
            DurationField::Seconds => MAX_SECONDS,
        }
    }

    /// Value assumed when the field is left blank.
    pub fn blank_default(&self) -> u64 {
        match self {
            DurationField::Seconds => DEFAULT_SESSION_SECONDS,
            DurationField::Hours | DurationField::Minutes => 0,
        }
    }

    fn check(&self, value: u64) -> Result<u64, RecorderError> {
        if value > self.max() {
            return Err(RecorderError::InputOutOfRange {
                field: *self,
                value,
                max: self.max(),
            });
        }
        Ok(value)
    }

    fn parse(&self, text: &str) -> Result<u64, RecorderError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(self.blank_default());
        }
        if !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(RecorderError::InvalidNumber {
                field: *self,
                value: text.to_string(),
            });
        }
        let value = text.parse::<u64>().map_err(|_| RecorderError::InvalidNumber {
            field: *self,
            value: text.to_string(),
        })?;
        self.check(value)
    }
}

impl fmt::Display for DurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationField::Hours => write!(f, "hours"),
            DurationField::Minutes => write!(f, "minutes"),
            DurationField::Seconds => write!(f, "seconds"),
        }
    }
}

/// Length of a recording session as entered by the user.
///
/// # Examples
///
/// ```
/// use recorder_rs::SessionDuration;
///
/// let duration = SessionDuration::from_fields("1", "", "30").unwrap();
/// assert_eq!(duration.total_seconds(), 3630);
///
/// // A blank seconds field means five seconds.
/// assert_eq!(SessionDuration::from_fields("", "", "").unwrap().total_seconds(), 5);
/// assert!(SessionDuration::from_fields("", "60", "").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionDuration {
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Default for SessionDuration {
    fn default() -> Self {
        Self {
            hours: DurationField::Hours.blank_default(),
            minutes: DurationField::Minutes.blank_default(),
            seconds: DurationField::Seconds.blank_default(),
        }
    }
}

impl SessionDuration {
    /// Returns InputOutOfRange if hours > 99 or minutes/seconds > 59.
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Result<Self, RecorderError> {
        Ok(Self {
            hours: DurationField::Hours.check(hours)?,
            minutes: DurationField::Minutes.check(minutes)?,
            seconds: DurationField::Seconds.check(seconds)?,
        })
    }

    /// Builds a duration from the raw text of the three inputs. Blank fields count as zero,
    /// except a blank seconds field which counts as five.
    pub fn from_fields(hours: &str, minutes: &str, seconds: &str) -> Result<Self, RecorderError> {
        Ok(Self {
            hours: DurationField::Hours.parse(hours)?,
            minutes: DurationField::Minutes.parse(minutes)?,
            seconds: DurationField::Seconds.parse(seconds)?,
        })
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds
    }
}
