//! Reads recorded session logs back into samples.

use std::fs;
use std::path::Path;

use common::{SensorSample, SensorType};

use crate::models::errors::SourceError;

/// Returns the samples stored in `path`, in file order, tagged as `sensor_type`.
pub fn read_log(path: &Path, sensor_type: SensorType) -> Result<Vec<SensorSample>, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    content
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            SensorSample::from_log_line(line, sensor_type.clone()).map_err(|source| {
                SourceError::MalformedLog {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    source,
                }
            })
        })
        .collect()
}

/// Same as [`read_log`], recovering the sensor from the `<timestamp> <suffix>.txt` file name.
pub fn read_session_log(path: &Path) -> Result<Vec<SensorSample>, SourceError> {
    let sensor_type = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(SensorType::from_file_name)
        .ok_or_else(|| SourceError::UnknownLogFile(path.to_path_buf()))?;
    read_log(path, sensor_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::LogLineError;

    #[test]
    fn test_read_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2024-03-09 07:05:03.250 gyr.txt");
        fs::write(
            &path,
            "2024-03-09 07:05:03.260,0.1,0.2,0.3\n2024-03-09 07:05:03.280,-1,0,1e-5\n",
        )
        .unwrap();

        let samples = read_session_log(&path).unwrap();
        assert_eq!(samples.len(), 2);
        assert!(samples
            .iter()
            .all(|s| s.get_sensor_type() == &SensorType::Gyroscope));
        assert_eq!(samples[1].get_measurement().inner(), [-1.0, 0.0, 1e-5]);
        assert_eq!(
            samples[1].get_timestamp().to_string(),
            "2024-03-09 07:05:03.280"
        );
    }

    #[test]
    fn test_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2024-03-09 07:05:03.250 acc.txt");
        fs::write(&path, "").unwrap();
        assert!(read_session_log(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, "2024-03-09 07:05:03.260,0.1,0.2,0.3\nbroken\n").unwrap();

        match read_log(&path, SensorType::Accelerometer) {
            Err(SourceError::MalformedLog { line, source, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(source, LogLineError::FieldCount(1));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_unknown_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            read_session_log(&path),
            Err(SourceError::UnknownLogFile(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing acc.txt");
        assert!(matches!(
            read_session_log(&path),
            Err(SourceError::Io { .. })
        ));
    }
}
