use std::path::PathBuf;
use thiserror::Error;

/// Axis bounds were requested for a schedule with no tasks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Schedule contains no tasks; cannot derive the date axis")]
pub struct EmptyScheduleError;

/// Errors from reading a CSV schedule.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row could not be parsed.
    #[error("Failed to read CSV headers: {0}")]
    Csv(#[from] csv::Error),

    /// One of ID, Name, Start, Finish has no matching header.
    #[error(
        "CSV is missing required columns. Found headers: {found:?}. \
         Need columns for: ID, Name, Start, Finish."
    )]
    MissingColumns { found: Vec<String> },
}

/// Errors from saving or loading a chart scene.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize scene: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
