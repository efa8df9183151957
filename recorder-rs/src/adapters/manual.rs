// Timer ticking only when told to. Lets tests drive a countdown one second at a time.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::ports::{Ticks, TimerPort};

struct TickChannel {
    sender: UnboundedSender<()>,
    receiver: Option<UnboundedReceiver<()>>,
}

impl TickChannel {
    fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: Some(receiver),
        }
    }
}

/// Timer whose ticks are fired explicitly with [`ManualTimer::fire`].
///
/// Ticks fired before a timer is started are kept for the next started timer.
#[derive(Clone)]
pub struct ManualTimer {
    channel: Arc<Mutex<TickChannel>>,
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualTimer {
    pub fn new() -> Self {
        Self {
            channel: Arc::new(Mutex::new(TickChannel::new())),
        }
    }

    /// Fires one tick. Returns false if the last started timer is gone.
    pub fn fire(&self) -> bool {
        let channel = self.channel.lock().unwrap_or_else(PoisonError::into_inner);
        channel.sender.send(()).is_ok()
    }
}

struct ManualTicks(UnboundedReceiver<()>);

#[async_trait]
impl Ticks for ManualTicks {
    async fn tick(&mut self) {
        if self.0.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}

impl TimerPort for ManualTimer {
    fn start(&self, _period: Duration) -> Box<dyn Ticks> {
        let mut channel = self.channel.lock().unwrap_or_else(PoisonError::into_inner);
        let receiver = match channel.receiver.take() {
            Some(receiver) => receiver,
            None => {
                let (sender, receiver) = mpsc::unbounded_channel();
                channel.sender = sender;
                receiver
            }
        };
        Box::new(ManualTicks(receiver))
    }
}
