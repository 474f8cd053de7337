//! Error types for tsref-core

use std::path::PathBuf;

/// Result type for tsref-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tsref-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from tsref-fs
    #[error(transparent)]
    Fs(#[from] tsref_fs::Error),

    /// Error from tsref-workspace
    #[error(transparent)]
    Workspace(#[from] tsref_workspace::Error),

    /// Error from tsref-content
    #[error(transparent)]
    Content(#[from] tsref_content::Error),

    #[error("Failed to parse tsconfig at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A sync task panicked or was cancelled
    #[error("Sync task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
