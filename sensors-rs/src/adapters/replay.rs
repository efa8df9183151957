// Redelivers samples read from recorded session logs.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use common::{SensorSample, SensorType};
use publisher::Publisher;

use crate::log_reader;
use crate::models::errors::SourceError;
use crate::ports::SensorSourcePort;

/// Source replaying recorded samples, one per sampling period, ordered by timestamp.
pub struct ReplaySource {
    samples: Vec<SensorSample>,
    sensor_names: Vec<(SensorType, String)>,
}

impl ReplaySource {
    /// Loads `<timestamp> <suffix>.txt` session logs.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, SourceError> {
        let mut samples = Vec::new();
        let mut sensor_names = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let file_samples = log_reader::read_session_log(path)?;
            log::info!("Loaded {} samples from {:?}", file_samples.len(), path);
            if let Some(sensor_type) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(SensorType::from_file_name)
            {
                sensor_names.push((sensor_type, format!("Replay of {}", path.display())));
            }
            samples.extend(file_samples);
        }
        Ok(Self::with_names(samples, sensor_names))
    }

    pub fn from_samples(samples: Vec<SensorSample>) -> Self {
        let mut sensor_names: Vec<(SensorType, String)> = Vec::new();
        for sample in samples.iter() {
            let sensor_type = sample.get_sensor_type();
            if !sensor_names.iter().any(|(known, _)| known == sensor_type) {
                sensor_names.push((sensor_type.clone(), format!("Replayed {}", sensor_type)));
            }
        }
        Self::with_names(samples, sensor_names)
    }

    fn with_names(mut samples: Vec<SensorSample>, sensor_names: Vec<(SensorType, String)>) -> Self {
        // Stable: samples sharing a timestamp keep their file order.
        samples.sort_by_key(|sample| sample.get_timestamp());
        Self {
            samples,
            sensor_names,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[async_trait]
impl SensorSourcePort for ReplaySource {
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

        let mut interval = tokio::time::interval(sampling_period);
        let mut pending = self.samples.iter();

        loop {
            tokio::select! {
                _ = &mut aborted => {
                    log::info!("Replay aborted");
                    break;
                }

                _ = interval.tick() => {
                    match pending.next() {
                        Some(sample) => publisher.notify(sample),
                        None => {
                            log::info!("Replay finished, {} samples delivered", self.samples.len());
                            break;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn sensor_names(&self) -> Vec<(SensorType, String)> {
        self.sensor_names.clone()
    }
}
