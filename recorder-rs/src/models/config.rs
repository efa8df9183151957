use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_OUTPUT_DIR, TICK_PERIOD_MILLIS};
use crate::models::errors::RecorderError;

/// Recorder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Directory receiving the session log files.
    pub output_dir: PathBuf,
    /// Create `output_dir` when a session starts if it does not exist.
    pub auto_create_dir: bool,
    /// Countdown tick period; one tick removes one second from the countdown.
    pub tick_period_ms: u64,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            auto_create_dir: true,
            tick_period_ms: TICK_PERIOD_MILLIS,
        }
    }
}

impl RecorderConfig {
    pub fn validate(&self) -> Result<(), RecorderError> {
        if self.tick_period_ms == 0 {
            return Err(RecorderError::Configuration(
                "tick period must be positive".to_string(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(RecorderError::Configuration(
                "output directory must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}
