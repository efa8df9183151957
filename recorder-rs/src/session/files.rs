use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use common::{SensorSample, SensorType, Timestamp};

use crate::constants::FILE_NAME_ATTEMPTS;
use crate::ports::{LogWriter, StoragePort};

struct LogFile {
    path: PathBuf,
    writer: LogWriter,
}

/// The log files of one session, one per tracked sensor, indexed by [`SensorType::index`].
pub(crate) struct SessionFiles {
    files: Vec<LogFile>,
}

/// `<timestamp> <suffix>.txt`
pub(crate) fn log_file_name(timestamp: Timestamp, sensor_type: &SensorType) -> Option<String> {
    sensor_type
        .file_suffix()
        .map(|suffix| format!("{} {}.txt", timestamp, suffix))
}

impl SessionFiles {
    /// Creates every log file or none: files created before a failure are removed again.
    pub(crate) fn create(storage: &dyn StoragePort, timestamp: Timestamp) -> io::Result<Self> {
        let mut files: Vec<LogFile> = Vec::with_capacity(SensorType::tracked().len());
        for sensor_type in SensorType::tracked() {
            let Some(file_name) = log_file_name(timestamp, &sensor_type) else {
                continue;
            };
            match storage.create(&file_name) {
                Ok((path, writer)) => files.push(LogFile { path, writer }),
                Err(e) => {
                    for created in files {
                        drop(created.writer);
                        if let Err(remove_error) = storage.remove(&created.path) {
                            log::warn!("Could not remove {:?}: {}", created.path, remove_error);
                        }
                    }
                    return Err(e);
                }
            }
        }
        Ok(Self { files })
    }

    /// Creates the files of a session starting now. When files with the current timestamp
    /// already exist, waits for the next millisecond and takes a new timestamp.
    pub(crate) fn create_now(storage: &dyn StoragePort) -> io::Result<Self> {
        let mut attempt = 1;
        loop {
            match Self::create(storage, Timestamp::now()) {
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists && attempt < FILE_NAME_ATTEMPTS => {
                    log::debug!("Session files already exist ({}), retrying", e);
                    attempt += 1;
                    std::thread::sleep(Duration::from_millis(1));
                }
                result => return result,
            }
        }
    }

    pub(crate) fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|file| file.path.clone()).collect()
    }

    /// Appends `sample` to the file of its sensor. Returns false for untracked sensors.
    pub(crate) fn append(&mut self, sample: &SensorSample) -> io::Result<bool> {
        let Some(file) = sample
            .get_sensor_type()
            .index()
            .and_then(|idx| self.files.get_mut(idx))
        else {
            return Ok(false);
        };
        file.writer.write_all(sample.to_log_line().as_bytes())?;
        Ok(true)
    }

    /// Flushes and releases every file, reporting the first failure.
    pub(crate) fn close(self) -> io::Result<()> {
        let mut result = Ok(());
        for mut file in self.files {
            if let Err(e) = file.writer.flush() {
                log::error!("Failed to flush {:?}: {}", file.path, e);
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::adapters::CacheDirStorage;

    #[test]
    fn test_same_timestamp_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CacheDirStorage::new(dir.path(), true);
        let timestamp = Timestamp::now();

        let mut first = SessionFiles::create(&storage, timestamp).unwrap();
        let sample = SensorSample::new(SensorType::Accelerometer, timestamp, [1.0, 2.0, 3.0]);
        assert!(first.append(&sample).unwrap());
        let paths = first.paths();
        first.close().unwrap();

        let error = SessionFiles::create(&storage, timestamp).err().unwrap();
        assert_eq!(error.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), sample.to_log_line());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_back_to_back_sessions_get_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CacheDirStorage::new(dir.path(), true);

        let first = SessionFiles::create_now(&storage).unwrap();
        let second = SessionFiles::create_now(&storage).unwrap();
        for (a, b) in first.paths().iter().zip(second.paths().iter()) {
            assert_ne!(a, b);
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 6);
    }

    #[test]
    fn test_untracked_sample_not_appended() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CacheDirStorage::new(dir.path(), true);
        let mut files = SessionFiles::create_now(&storage).unwrap();

        let light = SensorSample::now(SensorType::Other("light".to_string()), [0.0; 3]);
        assert!(!files.append(&light).unwrap());
    }
}
