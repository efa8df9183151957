//! Live value formatting.

use common::{SensorType, XYZ};

/// Rounds half up to one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Formats a reading as `x unit, y unit, z unit`, each value rounded to one decimal.
/// Returns `None` for untracked sensors.
///
/// # Examples
///
/// ```
/// use common::{SensorType, XYZ};
/// use recorder_rs::models::display::format_live_value;
///
/// let text = format_live_value(&SensorType::Accelerometer, &XYZ::new([1.23, 4.56, 7.89]));
/// assert_eq!(text.as_deref(), Some("1.2 m/s², 4.6 m/s², 7.9 m/s²"));
/// ```
pub fn format_live_value(sensor_type: &SensorType, measurement: &XYZ) -> Option<String> {
    let unit = sensor_type.unit()?;
    let separator = format!(" {}, ", unit);
    let values: Vec<String> = measurement
        .iter()
        .map(|value| format!("{:.1}", round_one_decimal(value)))
        .collect();
    Some(format!("{} {}", values.join(&separator), unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(1.23), 1.2);
        assert_eq!(round_one_decimal(4.56), 4.6);
        assert_eq!(round_one_decimal(0.25), 0.3);
        assert_eq!(round_one_decimal(-0.26), -0.3);
        assert_eq!(round_one_decimal(-1.25), -1.2);
    }

    #[test]
    fn test_units_per_sensor() {
        let xyz = XYZ::new([0.0, 1.0, -2.04]);
        assert_eq!(
            format_live_value(&SensorType::Gyroscope, &xyz).unwrap(),
            "0.0 rad/s, 1.0 rad/s, -2.0 rad/s"
        );
        assert_eq!(
            format_live_value(&SensorType::Magnetometer, &xyz).unwrap(),
            "0.0 μT, 1.0 μT, -2.0 μT"
        );
    }

    #[test]
    fn test_untracked_sensor() {
        let xyz = XYZ::new([1.0, 2.0, 3.0]);
        assert_eq!(
            format_live_value(&SensorType::Other("light".to_string()), &xyz),
            None
        );
    }
}
