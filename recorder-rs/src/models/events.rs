use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

use common::SensorType;

/// Contents of the three countdown fields.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CountdownDisplay {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl CountdownDisplay {
    /// Zero-padded fields for `remaining_seconds`. Hours are not wrapped, so they may use
    /// more than two digits.
    pub fn from_remaining(remaining_seconds: u64) -> Self {
        let seconds = remaining_seconds % 60;
        let minutes = remaining_seconds / 60 % 60;
        let hours = remaining_seconds / 3600;
        Self {
            hours: format!("{:02}", hours),
            minutes: format!("{:02}", minutes),
            seconds: format!("{:02}", seconds),
        }
    }

    /// Empty fields, shown once no session is active.
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_cleared(&self) -> bool {
        self.hours.is_empty() && self.minutes.is_empty() && self.seconds.is_empty()
    }
}

impl fmt::Display for CountdownDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

/// Why a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The countdown reached zero.
    Elapsed,
    /// The session was stopped before the countdown finished.
    Stopped,
    /// A log file could not be written or closed.
    IoFailure(String),
}

/// Updates published by the recorder for whatever presents it.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// New live value line for a sensor, published for every tracked sample.
    LiveValue { sensor_type: SensorType, text: String },
    /// Name reported by the sensor source.
    SensorName { sensor_type: SensorType, name: String },
    Countdown(CountdownDisplay),
    /// Enabled state of the start control and the three duration inputs.
    ControlsEnabled(bool),
    SessionStarted { id: Uuid, files: Vec<PathBuf> },
    SessionEnded { id: Uuid, reason: EndReason },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_fields() {
        assert_eq!(CountdownDisplay::from_remaining(5).to_string(), "00:00:05");
        assert_eq!(CountdownDisplay::from_remaining(0).to_string(), "00:00:00");
        assert_eq!(CountdownDisplay::from_remaining(3661).to_string(), "01:01:01");
        assert_eq!(
            CountdownDisplay::from_remaining(99 * 3600 + 59 * 60 + 59).to_string(),
            "99:59:59"
        );
    }

    #[test]
    fn test_hours_are_not_clamped() {
        let display = CountdownDisplay::from_remaining(100 * 3600);
        assert_eq!(display.hours, "100");
        assert_eq!(display.minutes, "00");
    }

    #[test]
    fn test_cleared() {
        let display = CountdownDisplay::cleared();
        assert!(display.is_cleared());
        assert_eq!(display.seconds, "");
        assert!(!CountdownDisplay::from_remaining(0).is_cleared());
    }
}
