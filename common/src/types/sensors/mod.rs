pub mod sensor_type;

pub use crate::types::sensors::sensor_type::SensorType;
