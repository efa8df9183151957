use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use uuid::Uuid;

use publisher::{Publisher, PublisherError};

/// Listener recording every event published to it, in order.
pub struct EventSink<T> {
    id: Uuid,
    events: Arc<Mutex<Vec<T>>>,
}

impl<T> EventSink<T>
where
    T: Clone + Send + 'static,
{
    pub fn attach(publisher: &Publisher<T>) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let id = publisher.register(move |event: &T| {
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        });
        Self { id, events }
    }

    pub fn detach(&self, publisher: &Publisher<T>) -> Result<(), PublisherError> {
        publisher.unregister(self.id)
    }

    pub fn events(&self) -> Vec<T> {
        self.lock().clone()
    }

    /// Returns the recorded events and forgets them.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Polls until some recorded event matches `predicate`. Returns false on timeout.
    pub async fn wait_for<F>(&self, predicate: F, timeout: Duration) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let deadline = Instant::now() + timeout;
        loop {
            if self.lock().iter().any(&predicate) {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            sleep(Duration::from_millis(5)).await;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
