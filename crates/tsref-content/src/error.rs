//! Error types for tsref-content

use std::path::PathBuf;

/// Result type for tsref-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tsref-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from tsref-fs
    #[error(transparent)]
    Fs(#[from] tsref_fs::Error),

    #[error("Failed to parse style config at {path}: {message}")]
    StyleParse { path: PathBuf, message: String },

    #[error("Failed to render JSON: {message}")]
    Render { message: String },
}
