use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for release path operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Unable to get git root directory: {0}")]
    GitRoot(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid release: {0}")]
    Release(String),

    #[error("Unknown environment: {0}")]
    Environment(String),

    #[error("Cannot read {}: {source}", .path.display())]
    MarkerFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-paths
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a git root discovery error with context
    pub fn git_root(msg: impl Into<String>) -> Self {
        ReleaseError::GitRoot(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a release error with context
    pub fn release(msg: impl Into<String>) -> Self {
        ReleaseError::Release(msg.into())
    }

    /// Create an environment error with context
    pub fn environment(msg: impl Into<String>) -> Self {
        ReleaseError::Environment(msg.into())
    }

    /// Wrap a failed read of a marker file (GIT_TAG, RELEASE)
    pub fn marker_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReleaseError::MarkerFile {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying cause is a missing file
    pub fn is_not_found(&self) -> bool {
        match self {
            ReleaseError::MarkerFile { source, .. } | ReleaseError::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
