//! Error types for tsref-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from tsref-core
    #[error(transparent)]
    Core(#[from] tsref_core::Error),

    /// Error from tsref-workspace
    #[error(transparent)]
    Workspace(#[from] tsref_workspace::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
