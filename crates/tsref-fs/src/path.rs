//! Normalized path handling for cross-platform output stability
//!
//! Project references are written into JSON files that are shared across
//! platforms, so every path this tool emits must use forward slashes. All
//! paths are therefore normalized internally and converted to the
//! platform-native form only at I/O boundaries.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let segment = segment.as_ref().replace('\\', "/");
        let joined = if self.inner.is_empty() || self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            None => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.trim_end_matches('/').rsplit('/').next()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Compute the path of `self` relative to the directory `base`.
    ///
    /// Purely lexical: neither path is touched on disk, so both sides must
    /// be either relative to the same root or absolute. Returns `None` when
    /// no relative path exists (e.g. a relative target against an absolute
    /// base). The result uses forward slashes regardless of platform.
    pub fn relative_from(&self, base: &NormalizedPath) -> Option<Self> {
        let diff = pathdiff::diff_paths(self.to_native(), base.to_native())?;
        if diff.as_os_str().is_empty() {
            return Some(Self::new("."));
        }
        Some(Self::new(diff))
    }

    /// Resolve to a canonical absolute path without UNC prefixes on Windows.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be resolved.
    pub fn canonicalize(&self) -> Result<Self> {
        let native = self.to_native();
        let resolved = dunce::canonicalize(&native).map_err(|e| Error::io(&native, e))?;
        Ok(Self::new(resolved))
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_backslashes_are_normalized() {
        let path = NormalizedPath::new(r"packages\core\tsconfig.json");
        assert_eq!(path.as_str(), "packages/core/tsconfig.json");
    }

    #[test]
    fn test_join_inserts_separator() {
        let path = NormalizedPath::new("packages/core");
        assert_eq!(path.join("tsconfig.json").as_str(), "packages/core/tsconfig.json");
    }

    #[test]
    fn test_join_on_trailing_slash() {
        let path = NormalizedPath::new("packages/");
        assert_eq!(path.join("core").as_str(), "packages/core");
    }

    #[test]
    fn test_parent_and_file_name() {
        let path = NormalizedPath::new("packages/core/tsconfig.json");
        assert_eq!(path.parent().unwrap().as_str(), "packages/core");
        assert_eq!(path.file_name(), Some("tsconfig.json"));
    }

    #[test]
    fn test_extension() {
        assert_eq!(NormalizedPath::new("a/.prettierrc").extension(), None);
        assert_eq!(
            NormalizedPath::new("a/.prettierrc.yaml").extension(),
            Some("yaml")
        );
    }

    #[rstest]
    #[case("packages/a", "packages/b", "../a")]
    #[case("packages/nested/deep", "packages/b", "../nested/deep")]
    #[case("packages/a", ".", "packages/a")]
    #[case("packages/a/tsconfig.json", "packages/a", "tsconfig.json")]
    #[case("packages/a", "packages/a", ".")]
    fn test_relative_from(#[case] target: &str, #[case] base: &str, #[case] expected: &str) {
        let target = NormalizedPath::new(target);
        let base = NormalizedPath::new(base);
        assert_eq!(target.relative_from(&base).unwrap().as_str(), expected);
    }

    #[test]
    fn test_relative_from_mixed_roots_is_none() {
        let target = NormalizedPath::new("packages/a");
        let base = NormalizedPath::new("/abs/packages/b");
        assert!(target.relative_from(&base).is_none());
    }

    proptest! {
        #[test]
        fn prop_normalization_is_idempotent(s in r"[a-zA-Z0-9_./\\-]{1,40}") {
            let once = NormalizedPath::new(&s);
            let twice = NormalizedPath::new(once.as_str());
            prop_assert_eq!(once.as_str(), twice.as_str());
        }

        #[test]
        fn prop_normalized_paths_never_contain_backslashes(s in r"[a-zA-Z0-9_./\\-]{1,40}") {
            prop_assert!(!NormalizedPath::new(&s).as_str().contains('\\'));
        }
    }
}
