use log::error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use common::constants::SAMPLING_PERIOD_MICROS;
use common::SensorSample;
use publisher::Publisher;

use crate::adapters::{ReplaySource, SimulatedSource};
use crate::models::errors::SourceError;
use crate::ports::SensorSourcePort;

/// Nominal sampling period requested from every source (50 Hz).
pub fn nominal_sampling_period() -> Duration {
    Duration::from_micros(SAMPLING_PERIOD_MICROS)
}

/// Starts `source` in a background task, delivering samples to `publisher` until
/// `abort_signal` is notified or the source is exhausted.
///
/// Errors returned by the source are logged; the task itself never fails.
pub fn run_source<S>(
    source: Arc<S>,
    sampling_period: Duration,
    publisher: Publisher<SensorSample>,
    abort_signal: Arc<Notify>,
) -> tokio::task::JoinHandle<()>
where
    S: SensorSourcePort + ?Sized + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = source.start(sampling_period, abort_signal, publisher).await {
            error!("Error in sensor source loop: {}", e);
        }
    })
}

/// Starts a simulated source at the nominal sampling period.
///
/// Returns a tuple containing:
/// - A `tokio::task::JoinHandle<()>` representing the spawned asynchronous task.
/// - An `Arc<SimulatedSource>` instance, allowing further interaction with the source.
pub fn run_simulated_source(
    add_sensor_noise: bool,
    publisher: Publisher<SensorSample>,
    abort_signal: Arc<Notify>,
) -> Result<(tokio::task::JoinHandle<()>, Arc<SimulatedSource>), SourceError> {
    let source = Arc::new(SimulatedSource::new(add_sensor_noise)?);
    let handle = run_source(
        Arc::clone(&source),
        nominal_sampling_period(),
        publisher,
        abort_signal,
    );
    Ok((handle, source))
}

/// Starts replaying session logs at the nominal sampling period.
pub fn run_replay_source<P: AsRef<std::path::Path>>(
    paths: &[P],
    publisher: Publisher<SensorSample>,
    abort_signal: Arc<Notify>,
) -> Result<(tokio::task::JoinHandle<()>, Arc<ReplaySource>), SourceError> {
    let source = Arc::new(ReplaySource::from_files(paths)?);
    let handle = run_source(
        Arc::clone(&source),
        nominal_sampling_period(),
        publisher,
        abort_signal,
    );
    Ok((handle, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_sampling_period_is_50_hz() {
        assert_eq!(nominal_sampling_period(), Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_run_source_logs_errors_instead_of_failing() {
        let source = Arc::new(SimulatedSource::new(false).unwrap());
        let handle = run_source(
            source,
            Duration::ZERO,
            Publisher::new(),
            Arc::new(Notify::new()),
        );
        handle.await.unwrap();
    }
}
