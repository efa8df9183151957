use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use common::{SensorSample, SensorType};
use publisher::Publisher;

use crate::models::errors::SourceError;

#[async_trait]
pub trait SensorSourcePort: Send + Sync {
    /// Starts delivering samples to `publisher` every `sampling_period`. Delivery stops when
    /// `abort_signal` is notified or the source runs out of samples.
    async fn start(
        &self,
        sampling_period: Duration,
        abort_signal: Arc<Notify>,
        publisher: Publisher<SensorSample>,
    ) -> Result<(), SourceError>;

    /// Human readable name of each sensor this source provides.
    fn sensor_names(&self) -> Vec<(SensorType, String)>;
}
