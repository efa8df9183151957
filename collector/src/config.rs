use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use common::constants::SAMPLING_PERIOD_MICROS;
use recorder_rs::RecorderConfig;

/// Collector configuration, read from TOML. Missing sections and keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub recorder: RecorderConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Simulated,
    Replay,
}

/// Where samples come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub sampling_period_us: u64,
    /// Adds gaussian noise to simulated readings.
    pub noise: bool,
    /// Session logs redelivered by the replay source.
    pub replay_files: Vec<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Simulated,
            sampling_period_us: SAMPLING_PERIOD_MICROS,
            noise: true,
            replay_files: Vec::new(),
        }
    }
}

impl SourceConfig {
    pub fn sampling_period(&self) -> Duration {
        Duration::from_micros(self.sampling_period_us)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.recorder
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        if self.source.sampling_period_us == 0 {
            return Err(ConfigError::ValidationError(
                "Sampling period must be positive".to_string(),
            ));
        }
        if self.source.kind == SourceKind::Replay && self.source.replay_files.is_empty() {
            return Err(ConfigError::ValidationError(
                "Replay source needs at least one file".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.recorder.output_dir, PathBuf::from("cache"));
        assert_eq!(config.source.sampling_period(), Duration::from_millis(20));
        assert!(config.source.noise);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [recorder]
            output_dir = "/var/lib/imu"

            [source]
            kind = "replay"
            replay_files = ["2024-03-09 07:05:03.000 acc.txt"]
            "#,
        )
        .unwrap();
        assert_eq!(config.recorder.output_dir, PathBuf::from("/var/lib/imu"));
        assert!(config.recorder.auto_create_dir);
        assert_eq!(config.recorder.tick_period_ms, 1000);
        assert_eq!(config.source.kind, SourceKind::Replay);
        assert_eq!(config.source.replay_files.len(), 1);
    }

    #[test]
    fn test_unknown_source_kind() {
        let result = AppConfig::from_toml("[source]\nkind = \"bluetooth\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validation_errors() {
        let result = AppConfig::from_toml("[source]\nkind = \"replay\"\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let result = AppConfig::from_toml("[source]\nsampling_period_us = 0\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let result = AppConfig::from_toml("[recorder]\ntick_period_ms = 0\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nnoise = false").unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert!(!config.source.noise);

        assert!(matches!(
            AppConfig::load_from_file("/nonexistent/collector.toml"),
            Err(ConfigError::IoError(_))
        ));
    }
}
