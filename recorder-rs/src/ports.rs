use async_trait::async_trait;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Ticks of a running periodic timer.
#[async_trait]
pub trait Ticks: Send {
    /// Resolves at the next tick.
    async fn tick(&mut self);
}

/// Periodic timer driving the session countdown.
pub trait TimerPort: Send + Sync + 'static {
    /// Starts a timer whose first tick happens one `period` from now. Must be called from
    /// within a tokio runtime.
    fn start(&self, period: Duration) -> Box<dyn Ticks>;
}

/// Open log file.
pub type LogWriter = Box<dyn Write + Send>;

/// Storage holding the session log files.
pub trait StoragePort: Send + Sync {
    /// Creates the empty file `file_name`. Fails with [`io::ErrorKind::AlreadyExists`] if it
    /// exists. Returns where the file lives and a writer appending to it.
    fn create(&self, file_name: &str) -> io::Result<(PathBuf, LogWriter)>;

    /// Removes a file returned by [`StoragePort::create`].
    fn remove(&self, path: &Path) -> io::Result<()>;
}
