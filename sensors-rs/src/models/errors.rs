//! Module errors

use std::path::PathBuf;
use thiserror::Error;

use common::LogLineError;

/// Represents the different types of errors that can occur while producing samples.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source was built with unusable parameters.
    #[error("invalid source configuration: {0}")]
    Configuration(String),

    /// A log file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file contains a line that does not follow `timestamp,x,y,z`.
    #[error("{path:?}, line {line}: {source}")]
    MalformedLog {
        path: PathBuf,
        line: usize,
        #[source]
        source: LogLineError,
    },

    /// The sensor of a log file cannot be recovered from its name.
    #[error("cannot infer sensor from file name {0:?}")]
    UnknownLogFile(PathBuf),
}
