// Emulates the accelerometer, gyroscope and magnetometer of a phone lying flat on a table.

mod gaussian;

use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::MissedTickBehavior;

use common::{SensorSample, SensorType};
use publisher::Publisher;

use crate::constants::{
    ACCELEROMETER_NOISE_STDEV, EARTH_MAGNETIC_FIELD, GYROSCOPE_NOISE_STDEV,
    MAGNETOMETER_NOISE_STDEV, STANDARD_GRAVITY,
};
use crate::models::errors::SourceError;
use crate::ports::SensorSourcePort;
use gaussian::GaussianNoise;

struct SimulatedSensor {
    sensor_type: SensorType,
    name: String,
    baseline: [f64; 3],
    noise: Option<GaussianNoise>,
}

/// Synthetic sensor source
pub struct SimulatedSource {
    sensors: Vec<SimulatedSensor>,
}

impl SimulatedSource {
    /// Creates a source for the three tracked sensors. Readings stay at their baseline
    /// unless `add_sensor_noise` is set.
    pub fn new(add_sensor_noise: bool) -> Result<Self, SourceError> {
        let noise = |stdev: f64| -> Result<Option<GaussianNoise>, SourceError> {
            add_sensor_noise
                .then(|| GaussianNoise::new(0.0, stdev))
                .transpose()
        };

        let sensors = vec![
            SimulatedSensor {
                sensor_type: SensorType::Accelerometer,
                name: "Simulated Accelerometer".to_string(),
                baseline: [0.0, 0.0, STANDARD_GRAVITY],
                noise: noise(ACCELEROMETER_NOISE_STDEV)?,
            },
            SimulatedSensor {
                sensor_type: SensorType::Gyroscope,
                name: "Simulated Gyroscope".to_string(),
                baseline: [0.0, 0.0, 0.0],
                noise: noise(GYROSCOPE_NOISE_STDEV)?,
            },
            SimulatedSensor {
                sensor_type: SensorType::Magnetometer,
                name: "Simulated Magnetometer".to_string(),
                baseline: EARTH_MAGNETIC_FIELD,
                noise: noise(MAGNETOMETER_NOISE_STDEV)?,
            },
        ];

        Ok(Self { sensors })
    }

    fn next_sample(&self, sensor: &SimulatedSensor, rng: &mut StdRng) -> SensorSample {
        let measurement = match sensor.noise.as_ref() {
            Some(noise) => noise.add_noise(rng, sensor.baseline),
            None => sensor.baseline,
        };
        SensorSample::now(sensor.sensor_type.clone(), measurement)
    }
}

#[async_trait]
impl SensorSourcePort for SimulatedSource {
    async fn start(
        &self,
        sampling_period: Duration,
        abort_signal: Arc<Notify>,
        publisher: Publisher<SensorSample>,
    ) -> Result<(), SourceError> {
        if sampling_period.is_zero() {
            return Err(SourceError::Configuration(
                "sampling period must be positive".to_string(),
            ));
        }

        let aborted = abort_signal.notified();
        tokio::pin!(aborted);

        let mut rng = StdRng::from_entropy();
        let mut interval = tokio::time::interval(sampling_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!(
            "Simulated source started, sampling every {} us",
            sampling_period.as_micros()
        );

        loop {
            tokio::select! {
                _ = &mut aborted => {
                    break;
                }

                _ = interval.tick() => {
                    for sensor in self.sensors.iter() {
                        let sample = self.next_sample(sensor, &mut rng);
                        publisher.notify(&sample);
                    }
                }
            }
        }

        log::info!("Simulated source stopped");
        Ok(())
    }

    fn sensor_names(&self) -> Vec<(SensorType, String)> {
        self.sensors
            .iter()
            .map(|sensor| (sensor.sensor_type.clone(), sensor.name.clone()))
            .collect()
    }
}
