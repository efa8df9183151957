// Log files stored in a local directory.

use std::fs::{self, OpenOptions};
use std::io::{self, LineWriter};
use std::path::{Path, PathBuf};

use crate::models::config::RecorderConfig;
use crate::ports::{LogWriter, StoragePort};

/// Stores session logs in a single directory, the application cache.
#[derive(Clone, Debug)]
pub struct CacheDirStorage {
    dir: PathBuf,
    auto_create_dir: bool,
}

impl CacheDirStorage {
    pub fn new<P: Into<PathBuf>>(dir: P, auto_create_dir: bool) -> Self {
        Self {
            dir: dir.into(),
            auto_create_dir,
        }
    }

    pub fn from_config(config: &RecorderConfig) -> Self {
        Self::new(config.output_dir.clone(), config.auto_create_dir)
    }
}

impl StoragePort for CacheDirStorage {
    fn create(&self, file_name: &str) -> io::Result<(PathBuf, LogWriter)> {
        if self.auto_create_dir {
            fs::create_dir_all(&self.dir)?;
        }
        let path = self.dir.join(file_name);
        // Existing logs belong to earlier sessions.
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        log::debug!("Created log file {:?}", path);
        // Each appended line reaches the file immediately.
        Ok((path, Box::new(LineWriter::new(file))))
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}
