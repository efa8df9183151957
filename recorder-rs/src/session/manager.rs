use log::{debug, error, info};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;
use uuid::Uuid;

use common::{SensorSample, SensorType};
use publisher::{Publisher, PublisherError};

use super::files::SessionFiles;
use crate::models::display::format_live_value;
use crate::models::duration::SessionDuration;
use crate::models::errors::RecorderError;
use crate::models::events::{CountdownDisplay, EndReason, SessionEvent};
use crate::ports::StoragePort;

/// Identifies a started session and lets its countdown be cancelled.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    pub id: Uuid,
    pub total_seconds: u64,
    /// Notified once when the session ends, whatever the reason.
    pub abort_signal: Arc<Notify>,
}

/// Result of a countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No session with the ticking id is active.
    Idle,
    Running { remaining_seconds: u64 },
    /// The tick ended the session.
    Finished,
}

struct ActiveSession {
    id: Uuid,
    files: SessionFiles,
    total_seconds: u64,
    remaining_seconds: u64,
    abort_signal: Arc<Notify>,
}

/// Owns the recording session: its log files and its countdown.
///
/// Ticks and samples may arrive from different threads; both go through the same lock, so
/// lines of one file are written in arrival order.
///
/// Events are queued while that lock is held, so the queue follows the order of the state
/// changes. They are delivered one at a time, after the lock is released, by whichever call
/// finds no delivery in progress. Listeners may call back into the manager: the events of
/// such a nested call are delivered after the ones of the call that notified the listener.
pub struct SessionManager {
    session: Mutex<Option<ActiveSession>>,
    storage: Box<dyn StoragePort>,
    events: Publisher<SessionEvent>,
    outbox: Mutex<VecDeque<SessionEvent>>,
    delivering: AtomicBool,
}

impl SessionManager {
    pub fn new<S: StoragePort + 'static>(storage: S) -> Self {
        Self {
            session: Mutex::new(None),
            storage: Box::new(storage),
            events: Publisher::new(),
            outbox: Mutex::new(VecDeque::new()),
            delivering: AtomicBool::new(false),
        }
    }

    /// Publisher of every [`SessionEvent`].
    pub fn events(&self) -> &Publisher<SessionEvent> {
        &self.events
    }

    pub fn subscribe<F>(&self, listener: F) -> Uuid
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        self.events.register(listener)
    }

    pub fn unsubscribe(&self, id: Uuid) -> Result<(), PublisherError> {
        self.events.unregister(id)
    }

    pub fn is_recording(&self) -> bool {
        self.lock().is_some()
    }

    pub fn remaining_seconds(&self) -> Option<u64> {
        self.lock().as_ref().map(|session| session.remaining_seconds)
    }

    /// Starts a session lasting `duration`.
    ///
    /// Creates the three log files, disables the controls and shows the full duration on the
    /// countdown. The caller is expected to call [`SessionManager::on_tick`] once per second
    /// with the returned id.
    ///
    /// # Errors
    /// - SessionActive if a session is already recording
    /// - ZeroDuration if the duration is zero seconds
    /// - Io if a log file cannot be created; no file is left behind
    pub fn start_session(&self, duration: SessionDuration) -> Result<SessionHandle, RecorderError> {
        let total_seconds = duration.total_seconds();

        let handle = {
            let mut session = self.lock();
            if session.is_some() {
                return Err(RecorderError::SessionActive);
            }
            if total_seconds == 0 {
                return Err(RecorderError::ZeroDuration);
            }

            let files = SessionFiles::create_now(self.storage.as_ref()).map_err(|e| {
                error!("Failed to create session files: {}", e);
                RecorderError::Io(e)
            })?;

            let handle = SessionHandle {
                id: Uuid::new_v4(),
                total_seconds,
                abort_signal: Arc::new(Notify::new()),
            };

            self.enqueue(vec![
                SessionEvent::ControlsEnabled(false),
                SessionEvent::SessionStarted {
                    id: handle.id,
                    files: files.paths(),
                },
                SessionEvent::Countdown(CountdownDisplay::from_remaining(total_seconds)),
            ]);

            *session = Some(ActiveSession {
                id: handle.id,
                files,
                total_seconds,
                remaining_seconds: total_seconds,
                abort_signal: Arc::clone(&handle.abort_signal),
            });
            handle
        };

        info!(
            "Recording session {} started for {} seconds",
            handle.id, total_seconds
        );
        self.deliver();
        Ok(handle)
    }

    /// Removes one second from the countdown of session `id`, ending the session when it
    /// reaches zero. Ticks for any other session are ignored.
    pub fn on_tick(&self, id: Uuid) -> TickOutcome {
        let outcome = {
            let mut session = self.lock();
            let remaining_seconds = match session.as_mut() {
                Some(active) if active.id == id => {
                    active.remaining_seconds = active.remaining_seconds.saturating_sub(1);
                    active.remaining_seconds
                }
                _ => return TickOutcome::Idle,
            };

            let mut events = vec![SessionEvent::Countdown(CountdownDisplay::from_remaining(
                remaining_seconds,
            ))];

            let outcome = if remaining_seconds > 0 {
                TickOutcome::Running { remaining_seconds }
            } else {
                if let Some(finished) = session.take() {
                    Self::end_session(finished, EndReason::Elapsed, &mut events);
                }
                TickOutcome::Finished
            };
            self.enqueue(events);
            outcome
        };

        self.deliver();
        outcome
    }

    /// Shows `sample` as a live value and, while recording, appends it to the file of its
    /// sensor. Samples from untracked sensors are dropped.
    ///
    /// A failed append ends the session with [`EndReason::IoFailure`].
    pub fn on_sample(&self, sample: &SensorSample) {
        let sensor_type = sample.get_sensor_type();
        let Some(text) = format_live_value(sensor_type, &sample.get_measurement()) else {
            debug!("Ignoring sample from untracked sensor {}", sensor_type);
            return;
        };

        {
            let mut session = self.lock();
            let mut events = vec![SessionEvent::LiveValue {
                sensor_type: sensor_type.clone(),
                text,
            }];

            let failure = match session.as_mut() {
                Some(active) => active.files.append(sample).err(),
                None => None,
            };
            if let Some(e) = failure {
                error!("Failed to append {} sample: {}", sensor_type, e);
                if let Some(failed) = session.take() {
                    Self::end_session(failed, EndReason::IoFailure(e.to_string()), &mut events);
                }
            }
            self.enqueue(events);
        }

        self.deliver();
    }

    /// Ends the active session before its countdown elapses.
    ///
    /// Returns NoActiveSession if nothing is recording.
    pub fn stop_session(&self) -> Result<(), RecorderError> {
        {
            let mut session = self.lock();
            let stopped = session.take().ok_or(RecorderError::NoActiveSession)?;
            let mut events = Vec::new();
            Self::end_session(stopped, EndReason::Stopped, &mut events);
            self.enqueue(events);
        }

        self.deliver();
        Ok(())
    }

    /// Publishes the name of each sensor reported by a source.
    pub fn announce_sensors(&self, sensors: &[(SensorType, String)]) {
        self.enqueue(
            sensors
                .iter()
                .filter(|(sensor_type, _)| sensor_type.is_tracked())
                .map(|(sensor_type, name)| SessionEvent::SensorName {
                    sensor_type: sensor_type.clone(),
                    name: name.clone(),
                })
                .collect(),
        );
        self.deliver();
    }

    fn end_session(session: ActiveSession, reason: EndReason, events: &mut Vec<SessionEvent>) {
        let ActiveSession {
            id,
            files,
            total_seconds,
            remaining_seconds,
            abort_signal,
        } = session;

        let reason = match (files.close(), reason) {
            (Err(e), EndReason::Elapsed | EndReason::Stopped) => EndReason::IoFailure(e.to_string()),
            (_, reason) => reason,
        };
        abort_signal.notify_one();

        match &reason {
            EndReason::IoFailure(message) => {
                error!("Recording session {} aborted: {}", id, message)
            }
            _ => info!(
                "Recording session {} ended ({:?}), {} of {} seconds recorded",
                id,
                reason,
                total_seconds - remaining_seconds,
                total_seconds
            ),
        }

        events.push(SessionEvent::Countdown(CountdownDisplay::cleared()));
        events.push(SessionEvent::ControlsEnabled(true));
        events.push(SessionEvent::SessionEnded { id, reason });
    }

    fn enqueue(&self, events: Vec<SessionEvent>) {
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(events);
    }

    fn next_event(&self) -> Option<SessionEvent> {
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    /// Drains the queue unless another call is already draining it.
    fn deliver(&self) {
        loop {
            if self.delivering.swap(true, Ordering::AcqRel) {
                return;
            }
            while let Some(event) = self.next_event() {
                self.events.notify(&event);
            }
            self.delivering.store(false, Ordering::Release);

            // Events queued after the last pop but before the flag was cleared.
            let pending = !self
                .outbox
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .is_empty();
            if !pending {
                return;
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<ActiveSession>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
