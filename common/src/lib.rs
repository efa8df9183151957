//! General functionality for the `imu-collector` workspace

pub mod constants;

#[doc(hidden)]
pub mod types;

// Re-export types
#[doc(inline)]
pub use types::{LogLineError, SensorSample, SensorType, Timestamp, XYZ};
