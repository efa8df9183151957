// Countdown timer backed by a tokio interval.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{Instant, Interval};

use crate::ports::{Ticks, TimerPort};

#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalTimer;

impl IntervalTimer {
    pub fn new() -> Self {
        Self
    }
}

struct IntervalTicks(Interval);

#[async_trait]
impl Ticks for IntervalTicks {
    async fn tick(&mut self) {
        self.0.tick().await;
    }
}

impl TimerPort for IntervalTimer {
    fn start(&self, period: Duration) -> Box<dyn Ticks> {
        // Missed ticks burst to catch up, keeping the countdown aligned with wall-clock time.
        let interval = tokio::time::interval_at(Instant::now() + period, period);
        Box::new(IntervalTicks(interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let timer = IntervalTimer::new();
        let start = Instant::now();
        let mut ticks = timer.start(Duration::from_secs(1));

        ticks.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));
        ticks.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }
}
