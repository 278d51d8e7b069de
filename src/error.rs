/// Error taxonomy for a versioning run
///
/// Missing repositories are not errors; they surface as a degraded outcome.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VersioningError {
    #[error("Failed to open git repository at {path}: {source}")]
    Open { path: PathBuf, source: git2::Error },

    #[error("Failed to resolve {reference} to a commit: {source}")]
    Resolve { reference: String, source: git2::Error },

    #[error("Failed to query working tree status: {0}")]
    Status(#[source] git2::Error),

    #[error("Error creating file {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("Failed to read {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VersioningError {
    /// Errors the soft failure policy may swallow
    pub fn is_recoverable(&self) -> bool {
        matches!(self, VersioningError::Open { .. } | VersioningError::Resolve { .. } | VersioningError::Status(_))
    }
}
