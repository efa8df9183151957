use std::sync::Arc;

/// Callback registered in a [`Publisher`](crate::Publisher).
pub struct Listener<T> {
    callback: Arc<dyn Fn(&T) + Send + Sync>,
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<T> Listener<T> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Listener {
            callback: Arc::new(callback),
        }
    }

    pub fn call(&self, value: &T) {
        (self.callback)(value)
    }
}
