use super::{SensorType, Timestamp, XYZ};
use crate::constants::N_XYZ_COORDINATES;

/// One observation from a sensor.
///
/// # Examples
///
/// ```
/// use common::{SensorSample, SensorType, Timestamp};
///
/// let timestamp: Timestamp = "2024-03-09 07:05:03.250".parse().unwrap();
/// let sample = SensorSample::new(SensorType::Gyroscope, timestamp, [0.1, 0.2, 0.3]);
///
/// assert_eq!(sample.get_timestamp(), timestamp);
/// assert_eq!(sample.get_measurement().inner(), [0.1, 0.2, 0.3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SensorSample {
    sensor_type: SensorType,
    timestamp: Timestamp,
    measurement: XYZ,
}

impl SensorSample {
    pub fn new(
        sensor_type: SensorType,
        timestamp: Timestamp,
        measurement: [f64; N_XYZ_COORDINATES],
    ) -> Self {
        Self::from_xyz(sensor_type, timestamp, XYZ::new(measurement))
    }

    pub fn from_xyz(sensor_type: SensorType, timestamp: Timestamp, measurement: XYZ) -> Self {
        Self {
            sensor_type,
            timestamp,
            measurement,
        }
    }

    /// Stamps a reading with the current wall-clock time.
    pub fn now(sensor_type: SensorType, measurement: [f64; N_XYZ_COORDINATES]) -> Self {
        Self::new(sensor_type, Timestamp::now(), measurement)
    }

    pub fn get_sensor_type(&self) -> &SensorType {
        &self.sensor_type
    }

    pub fn get_timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn get_measurement(&self) -> XYZ {
        self.measurement
    }
}
