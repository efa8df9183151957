/// Standard gravity, reported on the z axis of a device lying flat.
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Typical geomagnetic field seen by a phone magnetometer, in μT.
pub const EARTH_MAGNETIC_FIELD: [f64; 3] = [22.0, 5.0, -40.0];

pub const ACCELEROMETER_NOISE_STDEV: f64 = 0.05;
pub const GYROSCOPE_NOISE_STDEV: f64 = 0.01;
pub const MAGNETOMETER_NOISE_STDEV: f64 = 0.5;
