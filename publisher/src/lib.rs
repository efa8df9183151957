//! # Crate publisher
//!
//! ## publisher
//!
//! The `publisher` crate provides a mechanism for registering and notifying listeners
//! of new events of type `T`.
//!
//! Sensor sources publish their samples through it, and the recorder publishes
//! display and session events through it, so neither side holds references to
//! the other.
//!
//! ### Example
//!
//! ```
//! use publisher::Publisher;
//!
//! let publisher = Publisher::<String>::new();
//!
//! // Register a listener
//! let listener_id = publisher.register(|data: &String| {
//!     println!("Listener received: {}", data);
//! });
//!
//! // Notify all listeners
//! publisher.notify(&"Hello, World!".to_string());
//!
//! // Unregister the listener
//! publisher.unregister(listener_id).expect("Failed to unregister listener");
//!
//! // Verify that no listeners are left
//! assert!(publisher.is_empty());
//! ```

mod listener;

use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

pub use listener::Listener;

#[derive(PartialEq, Clone, Debug, Error)]
pub enum PublisherError {
    #[error("listener with id {0} not found")]
    ListenerNotFound(Uuid),
}

/// Record of registered listeners that will be notified of updates.
///
/// Cloning a `Publisher` yields a handle to the same set of listeners.
pub struct Publisher<T> {
    listeners: Arc<DashMap<Uuid, Listener<T>>>,
}

impl<T> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Publisher<T> {
    /// Creates a new `Publisher` instance.
    ///
    /// The instance starts with no registered listeners.
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(DashMap::new()),
        }
    }

    /// Registers a listener callback to be notified of updates.
    ///
    /// The listener is a function or closure that accepts a `&T`
    pub fn register<F>(&self, listener: F) -> Uuid
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.register_listener(Listener::new(listener))
    }

    /// Registers an already built listener.
    pub fn register_listener(&self, listener: Listener<T>) -> Uuid {
        let id = Uuid::new_v4();
        self.listeners.insert(id, listener);
        log::debug!("Registered listener {}", id);
        id
    }

    /// Unregisters a listener callback with a given id
    /// Returns PublisherError::ListenerNotFound() if no id matches with any of the registered listeners
    pub fn unregister(&self, id: Uuid) -> Result<(), PublisherError> {
        self.listeners
            .remove(&id)
            .map(|_| ())
            .ok_or(PublisherError::ListenerNotFound(id))
    }

    /// Calls each registered listener with the provided event.
    ///
    /// Listeners are collected before any of them runs, so a listener may
    /// register or unregister listeners without deadlocking.
    pub fn notify(&self, event: &T) {
        let listeners: Vec<Listener<T>> = self
            .listeners
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        for listener in listeners {
            listener.call(event);
        }
    }

    // Returns true if no listeners registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    // Returns number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}
