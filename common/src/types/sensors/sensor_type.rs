use std::fmt;

/// Represents different types of sensors.
///
/// # Variants
///
/// - `Accelerometer`: 3-axis acceleration, m/s².
/// - `Gyroscope`: 3-axis angular rate, rad/s.
/// - `Magnetometer`: 3-axis magnetic field, μT.
/// - `Other(String)`: any other sensor, with a custom string description. Readings
///   from these sensors are not tracked.
///
/// # Examples
///
/// ```
/// use common::types::sensors::SensorType;
///
/// let sensor = SensorType::try_from("GYROSCOPE").unwrap();
/// assert_eq!(sensor, SensorType::Gyroscope);
/// assert_eq!(sensor.file_suffix(), Some("gyr"));
///
/// let sensor = SensorType::try_from("light").unwrap();
/// assert_eq!(sensor, SensorType::Other(String::from("light")));
/// assert!(!sensor.is_tracked());
/// ```
#[derive(Clone, Debug, PartialEq, PartialOrd, Hash, Eq)]
pub enum SensorType {
    Accelerometer,
    Gyroscope,
    Magnetometer,
    Other(String),
}

pub const N_TRACKED_SENSORS: usize = 3;

const ACCELEROMETER_UNIT: &str = "m/s²";
const GYROSCOPE_UNIT: &str = "rad/s";
const MAGNETOMETER_UNIT: &str = "μT";

impl SensorType {
    /// Sensors recorded in a session, in file creation order.
    pub fn tracked() -> [SensorType; N_TRACKED_SENSORS] {
        [
            SensorType::Accelerometer,
            SensorType::Gyroscope,
            SensorType::Magnetometer,
        ]
    }

    pub fn is_tracked(&self) -> bool {
        !matches!(self, SensorType::Other(_))
    }

    /// Suffix used to name the log file of this sensor.
    pub fn file_suffix(&self) -> Option<&'static str> {
        match self {
            SensorType::Accelerometer => Some("acc"),
            SensorType::Gyroscope => Some("gyr"),
            SensorType::Magnetometer => Some("mag"),
            SensorType::Other(_) => None,
        }
    }

    /// Physical unit of the readings.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            SensorType::Accelerometer => Some(ACCELEROMETER_UNIT),
            SensorType::Gyroscope => Some(GYROSCOPE_UNIT),
            SensorType::Magnetometer => Some(MAGNETOMETER_UNIT),
            SensorType::Other(_) => None,
        }
    }

    /// Position of a tracked sensor within [`SensorType::tracked`].
    pub fn index(&self) -> Option<usize> {
        match self {
            SensorType::Accelerometer => Some(0),
            SensorType::Gyroscope => Some(1),
            SensorType::Magnetometer => Some(2),
            SensorType::Other(_) => None,
        }
    }

    /// Recovers the sensor from a log file name such as `2024-01-01 10:00:00.000 acc.txt`.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".txt")?;
        let suffix = stem.rsplit(' ').next()?;
        SensorType::try_from(suffix)
            .ok()
            .filter(|sensor| sensor.file_suffix() == Some(suffix))
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorType::Accelerometer => write!(f, "accelerometer"),
            SensorType::Gyroscope => write!(f, "gyroscope"),
            SensorType::Magnetometer => write!(f, "magnetometer"),
            SensorType::Other(name) => write!(f, "{}", name),
        }
    }
}

impl TryFrom<&str> for SensorType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower_case_value = value.trim().to_lowercase();
        if lower_case_value.is_empty() {
            return Err("Invalid format: empty sensor name".to_string());
        }
        if lower_case_value.contains("acc") {
            Ok(Self::Accelerometer)
        } else if lower_case_value.contains("gyr") {
            Ok(Self::Gyroscope)
        } else if lower_case_value.contains("mag") {
            Ok(Self::Magnetometer)
        } else {
            Ok(Self::Other(lower_case_value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            SensorType::try_from("accelerometer").unwrap(),
            SensorType::Accelerometer
        );
        assert_eq!(
            SensorType::try_from("gyroscope").unwrap(),
            SensorType::Gyroscope
        );
        assert_eq!(
            SensorType::try_from("magnetometer").unwrap(),
            SensorType::Magnetometer
        );
        assert_eq!(
            SensorType::try_from("other").unwrap(),
            SensorType::Other(String::from("other"))
        );
        assert!(SensorType::try_from("  ").is_err());
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            SensorType::try_from("ACCEleroMeter").unwrap(),
            SensorType::Accelerometer
        );
        assert_eq!(
            SensorType::try_from("gyrosCOPE").unwrap(),
            SensorType::Gyroscope
        );
        assert_eq!(
            SensorType::try_from("magneTometer").unwrap(),
            SensorType::Magnetometer
        );
        assert_eq!(
            SensorType::try_from("oThEr").unwrap(),
            SensorType::Other(String::from("other"))
        );
    }

    #[test]
    fn test_from_str_partial_match() {
        assert_eq!(SensorType::try_from("acC").unwrap(), SensorType::Accelerometer);
        assert_eq!(SensorType::try_from("GyR").unwrap(), SensorType::Gyroscope);
        assert_eq!(SensorType::try_from("Mag").unwrap(), SensorType::Magnetometer);
    }

    #[test]
    fn test_suffix_and_unit() {
        let expected = [("acc", "m/s²"), ("gyr", "rad/s"), ("mag", "μT")];
        for (sensor, (suffix, unit)) in SensorType::tracked().iter().zip(expected) {
            assert_eq!(sensor.file_suffix(), Some(suffix));
            assert_eq!(sensor.unit(), Some(unit));
        }
        let other = SensorType::Other("light".to_string());
        assert_eq!(other.file_suffix(), None);
        assert_eq!(other.unit(), None);
        assert_eq!(other.index(), None);
    }

    #[test]
    fn test_index_matches_tracked_order() {
        for (idx, sensor) in SensorType::tracked().iter().enumerate() {
            assert_eq!(sensor.index(), Some(idx));
        }
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(
            SensorType::from_file_name("2024-03-01 12:00:00.123 acc.txt"),
            Some(SensorType::Accelerometer)
        );
        assert_eq!(
            SensorType::from_file_name("2024-03-01 12:00:00.123 mag.txt"),
            Some(SensorType::Magnetometer)
        );
        assert_eq!(SensorType::from_file_name("2024-03-01 12:00:00.123 acc.csv"), None);
        assert_eq!(SensorType::from_file_name("notes.txt"), None);
    }

    #[test]
    fn test_from_file_name_needs_exact_suffix() {
        assert_eq!(
            SensorType::from_file_name("2024-03-01 12:00:00.123 gyr.txt"),
            Some(SensorType::Gyroscope)
        );
        assert_eq!(SensorType::from_file_name("2024-03-01 12:00:00.123 accel.txt"), None);
        assert_eq!(SensorType::from_file_name("2024-03-01 12:00:00.123 MAG.txt"), None);
        assert_eq!(SensorType::from_file_name("2024-03-01 12:00:00.123 .txt"), None);
    }
}
