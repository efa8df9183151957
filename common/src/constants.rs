/// Number of axes carried by every sample.
pub const N_XYZ_COORDINATES: usize = 3;

/// Nominal sensor sampling period requested from sources (50 Hz).
pub const SAMPLING_PERIOD_MICROS: u64 = 20_000;

/// Textual timestamp format, `yyyy-MM-dd HH:mm:ss.SSS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Field separator of a recorded log line.
pub const LOG_FIELD_SEPARATOR: char = ',';
