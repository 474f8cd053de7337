//! Error types for tsref-workspace
//!
//! None of these are recovered from locally: a failure in enumeration or
//! probing aborts the entire run.

use std::path::PathBuf;

/// Result type for tsref-workspace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tsref-workspace operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from tsref-fs
    #[error(transparent)]
    Fs(#[from] tsref_fs::Error),

    #[error(
        "No workspace root found walking up from {start} (expected a package.json with a \"workspaces\" field)"
    )]
    RootNotFound { start: PathBuf },

    #[error("Failed to run workspace listing command `{command}`: {source}")]
    ListingSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Workspace listing command `{command}` exited with {status:?}: {stderr}")]
    ListingCommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("Invalid JSON in workspace listing line `{line}`: {message}")]
    ListingParse { line: String, message: String },

    #[error("Failed to parse tsconfig at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A probe task panicked or was cancelled
    #[error("Probe task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
