//! # Crate sensors-rs
//!
//! ## sensors-rs
//!
//! The `sensors-rs` crate provides the sensor sources that feed a recorder. Every source
//! implements [`ports::SensorSourcePort`] and delivers [`common::SensorSample`]s to the
//! listeners of a [`publisher::Publisher`] at a nominal sampling period.
//!
//! Features include:
//! - Simulated 3-axis Accelerometer [m/s^2], Gyroscope [rad/s] and Magnetometer [uT]
//!   readings, with optional Gaussian noise.
//! - Replay of previously recorded session log files.
//! - Parsing of recorded log files back into samples.
//!
//! **NOTE** The sampling period is advisory: delivery is best-effort.

pub mod adapters;
pub mod constants;
pub mod log_reader;
pub mod models;
pub mod ports;
pub mod services;

pub use models::errors::SourceError;
