pub mod clock;
pub mod log_line;
pub mod sample;
pub mod sensors;
pub mod xyz;

pub use clock::Timestamp;
pub use log_line::LogLineError;
pub use sample::SensorSample;
pub use sensors::SensorType;
pub use xyz::XYZ;
