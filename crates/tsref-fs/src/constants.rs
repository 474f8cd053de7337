//! Well-known workspace filenames.

use std::path::Path;

/// Files the tool looks for inside a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceFile {
    /// The `tsconfig.json` compiler configuration
    Tsconfig,
    /// The `package.json` package manifest
    PackageManifest,
}

impl WorkspaceFile {
    /// Get the filename for this workspace file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tsconfig => "tsconfig.json",
            Self::PackageManifest => "package.json",
        }
    }
}

impl AsRef<Path> for WorkspaceFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for WorkspaceFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for WorkspaceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
