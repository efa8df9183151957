//! Line codec of recorded log files: `timestamp,x,y,z\n`.
//!
//! Values use the shortest representation that parses back to the same `f64`,
//! so reading a file returns exactly the samples that were written.

use thiserror::Error;

use super::{SensorSample, SensorType, Timestamp};
use crate::constants::{LOG_FIELD_SEPARATOR, N_XYZ_COORDINATES};

const N_LOG_FIELDS: usize = N_XYZ_COORDINATES + 1;

#[derive(Debug, Error, PartialEq)]
pub enum LogLineError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("invalid value '{0}'")]
    InvalidValue(String),
}

impl SensorSample {
    /// Renders the sample as one log line, newline included.
    pub fn to_log_line(&self) -> String {
        let measurement = self.get_measurement();
        let sep = LOG_FIELD_SEPARATOR;
        format!(
            "{}{sep}{}{sep}{}{sep}{}\n",
            self.get_timestamp(),
            measurement.x(),
            measurement.y(),
            measurement.z(),
        )
    }

    /// Parses one log line written for `sensor_type`. A trailing newline is accepted.
    pub fn from_log_line(line: &str, sensor_type: SensorType) -> Result<Self, LogLineError> {
        let fields: Vec<&str> = line
            .trim_end_matches(['\r', '\n'])
            .split(LOG_FIELD_SEPARATOR)
            .collect();
        if fields.len() != N_LOG_FIELDS {
            return Err(LogLineError::FieldCount(fields.len()));
        }

        let timestamp = fields[0]
            .parse::<Timestamp>()
            .map_err(|_| LogLineError::InvalidTimestamp(fields[0].to_string()))?;

        let mut measurement = [0f64; N_XYZ_COORDINATES];
        for (value, field) in measurement.iter_mut().zip(&fields[1..]) {
            *value = field
                .parse::<f64>()
                .map_err(|_| LogLineError::InvalidValue(field.to_string()))?;
        }

        Ok(SensorSample::new(sensor_type, timestamp, measurement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamp() -> Timestamp {
        "2024-03-09 07:05:03.250".parse().unwrap()
    }

    #[test]
    fn test_to_log_line() {
        let sample = SensorSample::new(SensorType::Accelerometer, timestamp(), [1.23, -4.5, 9.0]);
        assert_eq!(sample.to_log_line(), "2024-03-09 07:05:03.250,1.23,-4.5,9\n");
    }

    #[test]
    fn test_from_log_line() {
        let sample = SensorSample::from_log_line(
            "2024-03-09 07:05:03.250,0.1,0.2,-0.30000000000000004\n",
            SensorType::Gyroscope,
        )
        .unwrap();
        assert_eq!(sample.get_sensor_type(), &SensorType::Gyroscope);
        assert_eq!(sample.get_timestamp(), timestamp());
        assert_eq!(sample.get_measurement().inner(), [0.1, 0.2, -0.30000000000000004]);
    }

    #[test]
    fn test_written_line_reads_back_unchanged() {
        let sample = SensorSample::new(
            SensorType::Magnetometer,
            timestamp(),
            [std::f64::consts::PI, -1e-7, 48.123456789],
        );
        let line = sample.to_log_line();
        let parsed = SensorSample::from_log_line(&line, SensorType::Magnetometer).unwrap();
        assert_eq!(parsed, sample);
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(
            SensorSample::from_log_line("2024-03-09 07:05:03.250,1,2", SensorType::Accelerometer),
            Err(LogLineError::FieldCount(3))
        );
        assert_eq!(
            SensorSample::from_log_line("yesterday,1,2,3", SensorType::Accelerometer),
            Err(LogLineError::InvalidTimestamp("yesterday".to_string()))
        );
        assert_eq!(
            SensorSample::from_log_line("2024-03-09 07:05:03.250,1,x,3", SensorType::Accelerometer),
            Err(LogLineError::InvalidValue("x".to_string()))
        );
    }
}
