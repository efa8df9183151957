use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use uuid::Uuid;

use common::SensorSample;
use publisher::{Publisher, PublisherError};
use sensors_rs::ports::SensorSourcePort;
use sensors_rs::services::run_source;

use crate::adapters::{CacheDirStorage, IntervalTimer};
use crate::models::config::RecorderConfig;
use crate::models::duration::SessionDuration;
use crate::models::errors::RecorderError;
use crate::models::events::SessionEvent;
use crate::ports::{StoragePort, TimerPort};
use crate::session::{SessionHandle, SessionManager, TickOutcome};

/// Recording service: a [`SessionManager`] driven by a periodic timer.
pub struct RecorderService<T>
where
    T: TimerPort,
{
    manager: Arc<SessionManager>,
    timer: Arc<T>,
    tick_period: Duration,
}

impl<T> RecorderService<T>
where
    T: TimerPort,
{
    pub fn new<S: StoragePort + 'static>(storage: S, timer: T, tick_period: Duration) -> Self {
        Self {
            manager: Arc::new(SessionManager::new(storage)),
            timer: Arc::new(timer),
            tick_period,
        }
    }

    pub fn manager(&self) -> &Arc<SessionManager> {
        &self.manager
    }

    /// Starts a session and spawns its countdown task.
    ///
    /// The task ticks once per tick period until the session finishes, is stopped, or fails.
    /// Must be called from within a tokio runtime.
    pub fn start(
        &self,
        duration: SessionDuration,
    ) -> Result<(SessionHandle, JoinHandle<()>), RecorderError> {
        let session = self.manager.start_session(duration)?;

        let manager = Arc::clone(&self.manager);
        let timer = Arc::clone(&self.timer);
        let tick_period = self.tick_period;
        let countdown = session.clone();

        let handle = tokio::spawn(async move {
            let mut ticks = timer.start(tick_period);
            loop {
                tokio::select! {
                    _ = countdown.abort_signal.notified() => {
                        debug!("Countdown of session {} aborted", countdown.id);
                        break;
                    }
                    _ = ticks.tick() => {
                        if let TickOutcome::Finished | TickOutcome::Idle = manager.on_tick(countdown.id) {
                            break;
                        }
                    }
                }
            }
        });

        Ok((session, handle))
    }

    /// Parses the three duration fields, then starts a session as [`RecorderService::start`].
    pub fn start_from_fields(
        &self,
        hours: &str,
        minutes: &str,
        seconds: &str,
    ) -> Result<(SessionHandle, JoinHandle<()>), RecorderError> {
        let duration = SessionDuration::from_fields(hours, minutes, seconds)?;
        self.start(duration)
    }

    /// Stops the active session. Its countdown task exits on the session's abort signal.
    pub fn stop(&self) -> Result<(), RecorderError> {
        self.manager.stop_session()
    }

    pub fn on_sample(&self, sample: &SensorSample) {
        self.manager.on_sample(sample);
    }

    pub fn subscribe<F>(&self, listener: F) -> Uuid
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        self.manager.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: Uuid) -> Result<(), PublisherError> {
        self.manager.unsubscribe(id)
    }

    pub fn is_recording(&self) -> bool {
        self.manager.is_recording()
    }

    /// Feeds every sample of `source` into the recorder until `abort_signal` is notified or
    /// the source runs dry, and announces the names of its sensors.
    pub fn attach_source<S>(
        &self,
        source: Arc<S>,
        sampling_period: Duration,
        abort_signal: Arc<Notify>,
    ) -> JoinHandle<()>
    where
        S: SensorSourcePort + ?Sized + 'static,
    {
        self.manager.announce_sensors(&source.sensor_names());

        let samples = Publisher::<SensorSample>::new();
        let manager = Arc::clone(&self.manager);
        samples.register(move |sample: &SensorSample| manager.on_sample(sample));

        run_source(source, sampling_period, samples, abort_signal)
    }
}

/// Builds a recorder storing its logs as described by `config` and counting down with a
/// tokio interval.
pub fn run_service(
    config: &RecorderConfig,
) -> Result<Arc<RecorderService<IntervalTimer>>, RecorderError> {
    config.validate()?;
    info!(
        "Recording into {:?}, tick every {} ms",
        config.output_dir, config.tick_period_ms
    );
    Ok(Arc::new(RecorderService::new(
        CacheDirStorage::from_config(config),
        IntervalTimer::new(),
        config.tick_period(),
    )))
}
