//! Error type shared by the loader, the annotators and the report writer.

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::result;

/// Crate-wide result alias.
pub type Result<T> = result::Result<T, AnalysisError>;

/// Everything that can stop an analysis run.
#[derive(Debug)]
pub enum AnalysisError {
    /// Reading the input or writing a report failed.
    Io { path: PathBuf, source: io::Error },
    /// The output directory is missing (checked once, before any report is written).
    MissingOutputDir(PathBuf),
    Csv(csv::Error),
    Json(serde_json::Error),
    /// Imported annotations are inconsistent with their text.
    Annotation(String),
    InvalidConfig(String),
}

impl AnalysisError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnalysisError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            AnalysisError::MissingOutputDir(path) => write!(
                f,
                "output directory {} does not exist (create it or pass --create-output-dir)",
                path.display()
            ),
            AnalysisError::Csv(err) => write!(f, "CSV error: {err}"),
            AnalysisError::Json(err) => write!(f, "JSON error: {err}"),
            AnalysisError::Annotation(info) => write!(f, "invalid annotations: {info}"),
            AnalysisError::InvalidConfig(info) => write!(f, "invalid configuration: {info}"),
        }
    }
}

impl error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AnalysisError::Io { source, .. } => Some(source),
            AnalysisError::Csv(err) => Some(err),
            AnalysisError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> AnalysisError {
        AnalysisError::Csv(err)
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> AnalysisError {
        AnalysisError::Json(err)
    }
}
