//! Error types for profile ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading profiles.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Profile or batch file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profile is not a JSON object the form could have produced.
    #[error("failed to parse profile {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed CSV batch.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV header has no column that names a profile field.
    #[error("no profile columns found in {path}")]
    NoProfileColumns { path: PathBuf },
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_reported_as_missing_file() {
        let err = IngestError::read(
            "/path/to/profile.json",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert_eq!(err.to_string(), "file not found: /path/to/profile.json");
    }
}
