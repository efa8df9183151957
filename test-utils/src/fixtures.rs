use chrono::{Duration as ChronoDuration, NaiveDate, NaiveDateTime};

use common::{SensorSample, SensorType, Timestamp};

/// Fixed instant used as the first timestamp of generated samples: 2024-03-09 07:05:03.000.
pub fn base_timestamp() -> Timestamp {
    let datetime = NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|date| date.and_hms_milli_opt(7, 5, 3, 0))
        .unwrap_or(NaiveDateTime::MIN);
    Timestamp::from_datetime(datetime)
}

/// `count` samples of `sensor_type` spaced `step_ms` apart, with distinct measurements.
pub fn sample_sequence(sensor_type: SensorType, count: usize, step_ms: i64) -> Vec<SensorSample> {
    let start = base_timestamp().inner();
    (0..count)
        .map(|n| {
            let timestamp =
                Timestamp::from_datetime(start + ChronoDuration::milliseconds(step_ms * n as i64));
            let v = n as f64;
            SensorSample::new(
                sensor_type.clone(),
                timestamp,
                [v + 0.125, -v * 1.5, 9.80665 + v / 3.0],
            )
        })
        .collect()
}

/// Interleaves sequences of every tracked sensor as a source would deliver them.
pub fn interleaved_samples(count_per_sensor: usize, step_ms: i64) -> Vec<SensorSample> {
    let sequences: Vec<Vec<SensorSample>> = SensorType::tracked()
        .into_iter()
        .map(|sensor_type| sample_sequence(sensor_type, count_per_sensor, step_ms))
        .collect();
    (0..count_per_sensor)
        .flat_map(|n| sequences.iter().map(move |sequence| sequence[n].clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_timestamps() {
        let samples = sample_sequence(SensorType::Gyroscope, 3, 20);
        assert_eq!(
            samples[2].get_timestamp().to_string(),
            "2024-03-09 07:05:03.040"
        );
    }

    #[test]
    fn test_interleaved_order() {
        let samples = interleaved_samples(2, 20);
        assert_eq!(samples.len(), 6);
        assert_eq!(samples[0].get_sensor_type(), &SensorType::Accelerometer);
        assert_eq!(samples[1].get_sensor_type(), &SensorType::Gyroscope);
        assert_eq!(samples[3].get_sensor_type(), &SensorType::Accelerometer);
    }
}
