//! Error types for segmentation and corpus assembly

use std::path::PathBuf;

/// Timestamp normalization errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Invalid timestamp format '{0}': expected MM:SS or HH:MM:SS")]
    InvalidFormat(String),

    #[error("Invalid {field} value '{value}' in timestamp")]
    InvalidField { field: &'static str, value: String },
}

/// Errors that make a single source file unusable
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed source JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No DD-MM-YYYY date in filename: {0}")]
    MissingDate(String),

    #[error("Invalid date '{0}' in filename")]
    InvalidDate(String),

    #[error("Could not resolve video_id for {0}")]
    UnresolvedVideoId(String),

    #[error("Timestamp error: {0}")]
    Timestamp(#[from] TimestampError),
}

/// I/O failures that abort a whole assembly run
#[derive(thiserror::Error, Debug)]
pub enum AssemblyError {
    #[error("Source directory does not exist: {}", .0.display())]
    MissingSourceDir(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
