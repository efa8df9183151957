pub mod interval;
pub mod manual;
pub mod storage;

pub use interval::IntervalTimer;
pub use manual::ManualTimer;
pub use storage::CacheDirStorage;
