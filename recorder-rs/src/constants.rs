pub const TICK_PERIOD_MILLIS: u64 = 1000;

/// Seconds used when the seconds field is left blank.
pub const DEFAULT_SESSION_SECONDS: u64 = 5;

pub const MAX_HOURS: u64 = 99;
pub const MAX_MINUTES: u64 = 59;
pub const MAX_SECONDS: u64 = 59;

pub const DEFAULT_OUTPUT_DIR: &str = "cache";

/// Attempts at finding an unused timestamp for the files of a new session.
pub const FILE_NAME_ATTEMPTS: u32 = 5;
